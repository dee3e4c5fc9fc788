//! Analysis thresholds configuration
//!
//! Scoring points and tier ranges are fixed; only the advisory
//! thresholds below can be tuned.

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::AssessmentSettings;
use crate::domain::analysis::{CostPerUseThresholds, FAVORABLE_RATIO};

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_good_below")]
    pub cost_per_use_good_below: f64,

    #[serde(default = "default_acceptable_below")]
    pub cost_per_use_acceptable_below: f64,

    /// Budget share (percent) above which impact counts as high
    #[serde(default = "default_high_budget_impact")]
    pub high_budget_impact_percent: f64,

    #[serde(default = "default_favorable_ratio")]
    pub risk_reward_favorable_ratio: f64,
}

impl AnalysisConfig {
    pub fn settings(&self) -> AssessmentSettings {
        AssessmentSettings {
            cost_per_use: CostPerUseThresholds {
                good_below: self.cost_per_use_good_below,
                acceptable_below: self.cost_per_use_acceptable_below,
            },
            high_budget_impact_percent: self.high_budget_impact_percent,
            favorable_ratio: self.risk_reward_favorable_ratio,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cost_per_use_good_below <= 0.0
            || self.cost_per_use_good_below >= self.cost_per_use_acceptable_below
        {
            return Err(ValidationError::InvalidCostPerUseThresholds);
        }
        if !(0.0..=100.0).contains(&self.high_budget_impact_percent) {
            return Err(ValidationError::InvalidBudgetImpact);
        }
        if self.risk_reward_favorable_ratio <= 0.0 {
            return Err(ValidationError::InvalidRatioThreshold);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cost_per_use_good_below: default_good_below(),
            cost_per_use_acceptable_below: default_acceptable_below(),
            high_budget_impact_percent: default_high_budget_impact(),
            risk_reward_favorable_ratio: default_favorable_ratio(),
        }
    }
}

fn default_good_below() -> f64 {
    500.0
}

fn default_acceptable_below() -> f64 {
    2000.0
}

fn default_high_budget_impact() -> f64 {
    30.0
}

fn default_favorable_ratio() -> f64 {
    FAVORABLE_RATIO
}
