//! Drawcheck - Lottery Ticket Settlement Engine
//!
//! Core of a simulated lottery storefront: per-game paytables, a pure
//! match-and-settlement evaluator, and the caller machinery around it
//! (ticket store, draw result fixtures, checking service).
//!
//! The evaluator is deterministic and side-effect free; all persistence
//! happens in [`store::TicketStore`] driven by [`checker::TicketChecker`].

pub mod checker;
pub mod config;
pub mod errors;
pub mod games;
pub mod results;
pub mod store;

pub use checker::{CheckReport, TicketChecker};
pub use config::{AppConfig, ConfigLoader};
pub use errors::{DrawcheckError, DrawcheckResult};
pub use games::{evaluate, DrawResult, Evaluation, GameKind, NumberPick, SettlementOutcome, Ticket, TicketStatus};
pub use results::{FixtureResultSource, ResultSource};
pub use store::TicketStore;
