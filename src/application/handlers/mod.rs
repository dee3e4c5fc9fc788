//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod history;

pub use assessment::{
    AssessDecisionCommand, AssessDecisionHandler, AssessDecisionResult, AssessmentReport,
    AssessmentSettings,
};
pub use history::{
    ClearHistoryHandler, ClearHistoryResult, DeleteDecisionCommand, DeleteDecisionHandler,
    DeleteDecisionResult, ExportHistoryCommand, ExportHistoryHandler,
    GetHistoryStatisticsHandler, HistoryStatisticsView, RecordOutcomeCommand,
    RecordOutcomeHandler, RecordOutcomeResult,
};
