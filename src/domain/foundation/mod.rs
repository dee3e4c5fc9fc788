//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the purchase assessment domain.

mod answers;
mod errors;
mod ids;
mod probability;
mod score;
mod timestamp;

pub use answers::{affirmed, RegretLevel, YesNo};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::DecisionId;
pub use probability::Probability;
pub use score::{Score, MAX_SCORE};
pub use timestamp::Timestamp;
