//! History handlers.

mod delete_decision;
mod export_history;
mod get_statistics;
mod record_outcome;

pub use delete_decision::{
    ClearHistoryHandler, ClearHistoryResult, DeleteDecisionCommand, DeleteDecisionHandler,
    DeleteDecisionResult,
};
pub use export_history::{ExportHistoryCommand, ExportHistoryHandler};
pub use get_statistics::{GetHistoryStatisticsHandler, HistoryStatisticsView};
pub use record_outcome::{RecordOutcomeCommand, RecordOutcomeHandler, RecordOutcomeResult};
