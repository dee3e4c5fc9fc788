//! History configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::history::{InsightPolicy, DEFAULT_ACCURACY_TARGET, DEFAULT_MIN_OUTCOMES};

/// Decision history configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Outcomes needed before patterns are shown
    #[serde(default = "default_min_outcomes")]
    pub insight_min_outcomes: usize,

    /// Accuracy (percent) regarded as on target
    #[serde(default = "default_accuracy_target")]
    pub accuracy_target_percent: f64,

    /// Oldest records are dropped beyond this many
    pub max_records: Option<usize>,

    /// YAML file for a persistent history; in-memory when unset
    pub storage_path: Option<PathBuf>,
}

impl HistoryConfig {
    pub fn insight_policy(&self) -> InsightPolicy {
        InsightPolicy {
            min_outcomes: self.insight_min_outcomes,
            accuracy_target: self.accuracy_target_percent,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.insight_min_outcomes == 0 {
            return Err(ValidationError::InvalidMinOutcomes);
        }
        if !(0.0..=100.0).contains(&self.accuracy_target_percent) {
            return Err(ValidationError::InvalidAccuracyTarget);
        }
        if self.max_records == Some(0) {
            return Err(ValidationError::InvalidRecordCap);
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            insight_min_outcomes: default_min_outcomes(),
            accuracy_target_percent: default_accuracy_target(),
            max_records: None,
            storage_path: None,
        }
    }
}

fn default_min_outcomes() -> usize {
    DEFAULT_MIN_OUTCOMES
}

fn default_accuracy_target() -> f64 {
    DEFAULT_ACCURACY_TARGET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_defaults() {
        let config = HistoryConfig::default();
        assert_eq!(config.insight_min_outcomes, 3);
        assert_eq!(config.accuracy_target_percent, 70.0);
        assert!(config.max_records.is_none());
        assert_eq!(config.insight_policy(), InsightPolicy::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_outcomes = HistoryConfig {
            insight_min_outcomes: 0,
            ..Default::default()
        };
        assert_eq!(zero_outcomes.validate(), Err(ValidationError::InvalidMinOutcomes));

        let target = HistoryConfig {
            accuracy_target_percent: 120.0,
            ..Default::default()
        };
        assert_eq!(target.validate(), Err(ValidationError::InvalidAccuracyTarget));

        let cap = HistoryConfig {
            max_records: Some(0),
            ..Default::default()
        };
        assert_eq!(cap.validate(), Err(ValidationError::InvalidRecordCap));
    }
}
