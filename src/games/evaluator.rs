//! Match & settlement evaluation.
//!
//! Pure and deterministic: a (ticket, result, multiplier) triple always
//! produces the same outcome, so callers may re-check a ticket freely.
//! Persisting the outcome, and not applying it twice, is the caller's
//! job (see [`crate::checker`]).

use crate::games::paytable;
use crate::games::types::{DrawResult, Ticket};
use serde::Serialize;

/// Outcome of settling one ticket against one draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementOutcome {
    pub main_matches: usize,
    pub bonus_matches: usize,
    /// Tier label, empty for a losing ticket
    pub tier: String,
    pub is_winner: bool,
    /// Prize in minor currency units, already scaled by the stake
    /// multiplier and rounded to a whole minor unit
    pub win_amount: u64,
    /// The ticket numbers that hit, in the ticket's pick order, for the
    /// display layer to highlight
    pub matched_main: Vec<u8>,
    pub matched_bonus: Vec<u8>,
}

impl SettlementOutcome {
    fn no_prize(main_matches: usize, bonus_matches: usize, matched_main: Vec<u8>, matched_bonus: Vec<u8>) -> Self {
        Self {
            main_matches,
            bonus_matches,
            tier: String::new(),
            is_winner: false,
            win_amount: 0,
            matched_main,
            matched_bonus,
        }
    }
}

/// Result of an evaluation attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Evaluation {
    /// Ticket and result belong to different games; not a loss, the
    /// caller picked the wrong result
    NotApplicable,
    Settled(SettlementOutcome),
}

impl Evaluation {
    pub fn settled(self) -> Option<SettlementOutcome> {
        match self {
            Evaluation::Settled(outcome) => Some(outcome),
            Evaluation::NotApplicable => None,
        }
    }
}

/// Settle a ticket against a published result.
///
/// Matching is set intersection by value. A found paytable entry pays
/// `base_prize * stake_multiplier` rounded to the nearest minor unit;
/// no entry is the "No Prize" outcome, never an error.
pub fn evaluate(ticket: &Ticket, result: &DrawResult, stake_multiplier: f64) -> Evaluation {
    if ticket.game != result.game {
        return Evaluation::NotApplicable;
    }

    let matched_main = intersect(&ticket.numbers.main, &result.numbers.main);
    let matched_bonus = intersect(&ticket.numbers.bonus, &result.numbers.bonus);
    let main_matches = matched_main.len();
    let bonus_matches = matched_bonus.len();

    let outcome = match paytable::lookup(ticket.game, main_matches, bonus_matches) {
        Some(rule) => SettlementOutcome {
            main_matches,
            bonus_matches,
            tier: rule.tier.to_string(),
            is_winner: true,
            win_amount: (rule.base_prize as f64 * stake_multiplier).round() as u64,
            matched_main,
            matched_bonus,
        },
        None => SettlementOutcome::no_prize(main_matches, bonus_matches, matched_main, matched_bonus),
    };

    Evaluation::Settled(outcome)
}

fn intersect(picked: &[u8], drawn: &[u8]) -> Vec<u8> {
    picked.iter().copied().filter(|n| drawn.contains(n)).collect()
}
