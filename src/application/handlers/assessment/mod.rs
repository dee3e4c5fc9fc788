//! Assessment handlers.

mod assess_decision;

pub use assess_decision::{
    AssessDecisionCommand, AssessDecisionHandler, AssessDecisionResult, AssessmentReport,
    AssessmentSettings,
};
