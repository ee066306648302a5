//! JSON-file-backed ticket store.
//!
//! The storefront's local-storage analog: one flat collection of tickets
//! for all players, persisted as a single JSON document and filtered by
//! owner on read. Last write wins; there is no cross-process locking.

use crate::errors::{DrawcheckError, DrawcheckResult, StorageError};
use crate::games::evaluator::SettlementOutcome;
use crate::games::types::{Ticket, TicketStatus};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct TicketStore {
    path: PathBuf,
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Open the store at `path`. A missing file is an empty store;
    /// unparseable contents are a corruption error, not a silent reset.
    pub fn open(path: impl AsRef<Path>) -> DrawcheckResult<Self> {
        let path = path.as_ref().to_path_buf();

        let tickets = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                StorageError::CorruptedData(format!(
                    "Failed to decode ticket store {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StorageError::ReadFailed(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
                .into())
            }
        };

        tracing::debug!(path = %path.display(), tickets = tickets.len(), "Opened ticket store");
        Ok(Self { path, tickets })
    }

    /// Add a ticket and persist immediately
    pub fn add(&mut self, ticket: Ticket) -> DrawcheckResult<Uuid> {
        let id = ticket.id;
        tracing::info!(ticket_id = %id, game = %ticket.game, player = %ticket.player_id, "Storing ticket");
        self.tickets.push(ticket);
        self.save()?;
        Ok(id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn all_for_player(&self, player_id: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.player_id == player_id)
            .collect()
    }

    pub fn pending_for_player(&self, player_id: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.player_id == player_id && t.status == TicketStatus::Pending)
            .collect()
    }

    /// Write a settlement outcome back onto a pending ticket. A ticket
    /// settles exactly once; anything else is rejected so a re-check can
    /// never double-credit a win.
    pub fn apply_settlement(&mut self, id: Uuid, outcome: &SettlementOutcome) -> DrawcheckResult<()> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(DrawcheckError::TicketNotFound(id))?;

        if ticket.status != TicketStatus::Pending {
            return Err(DrawcheckError::AlreadySettled(id));
        }

        ticket.status = if outcome.is_winner {
            TicketStatus::Won
        } else {
            TicketStatus::Lost
        };
        ticket.win_amount = Some(outcome.win_amount);
        ticket.tier = if outcome.tier.is_empty() {
            None
        } else {
            Some(outcome.tier.clone())
        };
        ticket.settled_at = Some(Utc::now());

        tracing::info!(
            ticket_id = %id,
            status = %ticket.status,
            win_amount = outcome.win_amount,
            "Settled ticket"
        );

        self.save()
    }

    fn save(&self) -> DrawcheckResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.tickets).map_err(|e| {
            StorageError::WriteFailed(format!("Failed to encode ticket store: {}", e))
        })?;

        fs::write(&self.path, bytes).map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
