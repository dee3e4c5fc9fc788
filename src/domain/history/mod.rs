//! History Module - Recorded decisions, their outcomes and outcome analytics.
//!
//! # Components
//!
//! - `DecisionRecord` / `Outcome` - A scored decision and what happened next
//! - `DecisionHistory` - Newest-first aggregate with record/outcome/remove/clear
//! - `HistoryStatistics` / `HistoryInsights` - Accuracy and pattern feedback

mod record;
mod statistics;
mod store;

pub use record::{Correctness, DecisionRecord, Outcome, OutcomeAction, OutcomeResult};
pub use statistics::{
    HistoryInsights, HistoryStatistics, InsightPolicy, DEFAULT_ACCURACY_TARGET,
    DEFAULT_MIN_OUTCOMES,
};
pub use store::{DecisionHistory, HistorySnapshot};
