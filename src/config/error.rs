//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Insight minimum outcomes must be at least 1")]
    InvalidMinOutcomes,

    #[error("Accuracy target must be between 0 and 100")]
    InvalidAccuracyTarget,

    #[error("Record cap must be at least 1 when set")]
    InvalidRecordCap,

    #[error("Cost-per-use thresholds must be positive and increasing")]
    InvalidCostPerUseThresholds,

    #[error("Budget impact cut-off must be between 0 and 100")]
    InvalidBudgetImpact,

    #[error("Risk/reward ratio threshold must be positive")]
    InvalidRatioThreshold,

    #[error("Date format '{0}' is not a valid strftime pattern")]
    InvalidDateFormat(String),
}
