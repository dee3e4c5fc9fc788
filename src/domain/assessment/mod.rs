//! Assessment module - the typed inputs a purchase decision is scored from.

mod input;

pub use input::{
    AssessmentMode, DecisionInput, DeclaredOutcomes, FilterAnswers, HistoricalPattern,
    RegretHorizons,
};
