//! Risk Profiler - worst/base/best scenario weighting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upside-to-downside ratio at or above which risk is favorable.
pub const FAVORABLE_RATIO: f64 = 2.0;

/// One weighted scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScenario {
    /// Weight in percent (0-100).
    pub probability: f64,
    /// Monetary outcome; negative for a loss.
    pub outcome: f64,
    pub description: String,
}

impl RiskScenario {
    pub fn new(probability: f64, outcome: f64, description: impl Into<String>) -> Self {
        Self {
            probability,
            outcome,
            description: description.into(),
        }
    }

    fn weighted(&self) -> f64 {
        self.probability / 100.0 * self.outcome
    }
}

/// Best-case outcome relative to the maximum downside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RiskRewardRatio {
    Finite(f64),
    /// The worst case loses nothing.
    Unbounded,
}

impl RiskRewardRatio {
    /// Classifies the ratio against a favorable threshold.
    pub fn assess(&self, favorable_at: f64) -> RatioAssessment {
        match self {
            RiskRewardRatio::Unbounded => RatioAssessment::Favorable,
            RiskRewardRatio::Finite(r) if *r >= favorable_at => RatioAssessment::Favorable,
            RiskRewardRatio::Finite(r) if *r < 1.0 => RatioAssessment::Unfavorable,
            RiskRewardRatio::Finite(_) => RatioAssessment::Moderate,
        }
    }
}

impl fmt::Display for RiskRewardRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskRewardRatio::Finite(r) => write!(f, "1:{:.2}", r),
            RiskRewardRatio::Unbounded => write!(f, "1:∞"),
        }
    }
}

/// Qualitative reading of a risk/reward ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioAssessment {
    Favorable,
    Moderate,
    Unfavorable,
}

/// Probability-weighted view over three scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub worst: RiskScenario,
    pub base: RiskScenario,
    pub best: RiskScenario,
    pub expected_outcome: f64,
    /// Size of the worst-case loss; zero when the worst case is not a loss.
    pub max_downside: f64,
    pub risk_reward_ratio: RiskRewardRatio,
}

impl RiskProfile {
    /// Sum of the three scenario weights, for callers checking coherence.
    pub fn total_weight(&self) -> f64 {
        self.worst.probability + self.base.probability + self.best.probability
    }
}

/// Builder of risk profiles.
pub struct RiskProfiler;

impl RiskProfiler {
    /// Weighs the three scenarios.
    ///
    /// Weights are used as given even if they do not sum to 100; supplying
    /// coherent weights is the caller's responsibility.
    pub fn profile(worst: RiskScenario, base: RiskScenario, best: RiskScenario) -> RiskProfile {
        let expected_outcome = worst.weighted() + base.weighted() + best.weighted();

        let max_downside = if worst.outcome < 0.0 {
            worst.outcome.abs()
        } else {
            0.0
        };

        let risk_reward_ratio = if max_downside > 0.0 {
            RiskRewardRatio::Finite(best.outcome / max_downside)
        } else {
            RiskRewardRatio::Unbounded
        };

        RiskProfile {
            worst,
            base,
            best,
            expected_outcome,
            max_downside,
            risk_reward_ratio,
        }
    }
}
