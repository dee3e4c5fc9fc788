//! Domain layer containing the purchase decision engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, answers, errors)
//! - `assessment` - Typed decision input collected from the user
//! - `analysis` - Pure domain services (metrics, EV, risk, biases, scoring, alternatives)
//! - `history` - Recorded decisions, outcomes and accuracy statistics

pub mod analysis;
pub mod assessment;
pub mod foundation;
pub mod history;
