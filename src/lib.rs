//! Purchase Compass - Decision scoring and analysis for discretionary purchases
//!
//! This crate scores a purchase decision against six rational criteria,
//! maps the score to a recommendation tier and keeps a history of past
//! decisions and their outcomes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
