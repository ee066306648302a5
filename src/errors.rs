//! Error types for the drawcheck storefront core.
//!
//! The evaluator itself never fails: a mismatched game is a sentinel and
//! a missing paytable entry is a valid losing outcome. Errors here cover
//! the boundaries around it: ticket construction, the ticket store, and
//! configuration loading.

use crate::games::types::GameKind;
use uuid::Uuid;

/// Root error type for drawcheck operations
#[derive(Debug, thiserror::Error)]
pub enum DrawcheckError {
    #[error("Ticket error: {0}")]
    Ticket(#[from] TicketError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ticket not found: {0}")]
    TicketNotFound(Uuid),

    #[error("Ticket already settled: {0}")]
    AlreadySettled(Uuid),
}

/// Ticket construction / validation failures, raised at purchase time
#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("{game} takes {expected} main numbers, got {actual}")]
    WrongMainCount {
        game: GameKind,
        expected: usize,
        actual: usize,
    },

    #[error("{game} takes {expected} bonus numbers, got {actual}")]
    WrongBonusCount {
        game: GameKind,
        expected: usize,
        actual: usize,
    },

    #[error("Number {number} outside the {min}-{max} pool")]
    NumberOutOfRange { number: u8, min: u8, max: u8 },

    #[error("Duplicate number: {0}")]
    DuplicateNumber(u8),

    #[error("Stake {stake} is not a positive multiple of the minimum stake {min_stake}")]
    InvalidStake { stake: u64, min_stake: u64 },
}

/// Ticket store persistence failures
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Corrupted data: {0}")]
    CorruptedData(String),
}

/// Configuration loading / validation failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Missing required field: {0}")]
    MissingRequired(String),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Convenience type alias for Results
pub type DrawcheckResult<T> = Result<T, DrawcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DrawcheckError::from(TicketError::DuplicateNumber(7));
        assert!(err.to_string().contains("Ticket error"));
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_ticket_error_details() {
        let err = TicketError::WrongMainCount {
            game: GameKind::Lotto,
            expected: 6,
            actual: 4,
        };
        assert!(err.to_string().contains("6 main numbers"));
        assert!(err.to_string().contains("got 4"));
    }

    #[test]
    fn test_error_conversion() {
        let err: DrawcheckError = StorageError::CorruptedData("bad json".to_string()).into();
        assert!(matches!(err, DrawcheckError::Storage(_)));
    }
}
