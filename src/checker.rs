//! Ticket checking service: the dashboard's settlement loop.
//!
//! Drives the read-evaluate-write cycle the evaluator deliberately stays
//! out of. For every pending ticket of a player it finds the latest
//! published result for the ticket's game, evaluates, and writes the
//! outcome back to the store exactly once.

use crate::errors::DrawcheckResult;
use crate::games::evaluator::{evaluate, Evaluation, SettlementOutcome};
use crate::results::ResultSource;
use crate::store::TicketStore;
use serde::Serialize;
use uuid::Uuid;

/// Summary of one checking run, for the display layer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckReport {
    /// Tickets settled this run
    pub checked: usize,
    pub won: usize,
    pub lost: usize,
    /// Tickets left pending because their game has no published result
    pub awaiting_result: usize,
    /// Sum of win amounts credited this run, in minor currency units
    pub total_winnings: u64,
}

pub struct TicketChecker<S: ResultSource> {
    results: S,
}

impl<S: ResultSource> TicketChecker<S> {
    pub fn new(results: S) -> Self {
        Self { results }
    }

    /// Settle every pending ticket the player holds. Tickets whose game
    /// has no published result stay pending; everything else is settled
    /// once and never revisited on later runs.
    pub fn check_player(&self, store: &mut TicketStore, player_id: &str) -> DrawcheckResult<CheckReport> {
        let mut report = CheckReport::default();
        let mut settlements: Vec<(Uuid, SettlementOutcome)> = Vec::new();

        for ticket in store.pending_for_player(player_id) {
            let Some(result) = self.results.latest(ticket.game) else {
                tracing::debug!(ticket_id = %ticket.id, game = %ticket.game, "No published result yet");
                report.awaiting_result += 1;
                continue;
            };

            match evaluate(ticket, &result, ticket.stake_multiplier()) {
                Evaluation::Settled(outcome) => settlements.push((ticket.id, outcome)),
                // latest() filtered by game, so a mismatch means the
                // source is misbehaving; leave the ticket pending.
                Evaluation::NotApplicable => {
                    tracing::warn!(
                        ticket_id = %ticket.id,
                        ticket_game = %ticket.game,
                        result_game = %result.game,
                        "Result source returned a result for the wrong game"
                    );
                    report.awaiting_result += 1;
                }
            }
        }

        for (id, outcome) in settlements {
            if outcome.is_winner {
                report.won += 1;
                report.total_winnings += outcome.win_amount;
            } else {
                report.lost += 1;
            }
            report.checked += 1;
            store.apply_settlement(id, &outcome)?;
        }

        tracing::info!(
            player = player_id,
            checked = report.checked,
            won = report.won,
            total_winnings = report.total_winnings,
            "Checked tickets"
        );

        Ok(report)
    }
}
