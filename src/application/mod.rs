//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the history; query handlers only read it.

pub mod handlers;

pub use handlers::{
    // Assessment
    AssessDecisionCommand, AssessDecisionHandler, AssessDecisionResult, AssessmentReport,
    AssessmentSettings,
    // History commands
    ClearHistoryHandler, ClearHistoryResult, DeleteDecisionCommand, DeleteDecisionHandler,
    DeleteDecisionResult, ExportHistoryCommand, ExportHistoryHandler, RecordOutcomeCommand,
    RecordOutcomeHandler, RecordOutcomeResult,
    // History queries
    GetHistoryStatisticsHandler, HistoryStatisticsView,
};
