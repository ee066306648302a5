pub mod evaluator;
pub mod paytable;
pub mod types;

pub use evaluator::{evaluate, Evaluation, SettlementOutcome};
pub use paytable::{BonusRule, TierRule};
pub use types::*;
