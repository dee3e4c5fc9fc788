//! Expected-Value & Threshold Analyzer.
//!
//! Binary success/failure framing of a purchase:
//!
//! ```text
//! EV = p × benefit − (1 − p) × net_loss
//! p* = net_loss / (benefit + net_loss)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Probability;

/// Values closer to zero than this are treated as break-even.
pub const EV_EPSILON: f64 = 1e-9;

/// Sign of an expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvVerdict {
    Positive,
    Zero,
    Negative,
}

impl EvVerdict {
    /// Classifies a monetary expected value.
    pub fn classify(expected_value: f64) -> Self {
        if expected_value > EV_EPSILON {
            EvVerdict::Positive
        } else if expected_value < -EV_EPSILON {
            EvVerdict::Negative
        } else {
            EvVerdict::Zero
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EvVerdict::Positive => "Positive",
            EvVerdict::Zero => "Break-even",
            EvVerdict::Negative => "Negative",
        }
    }
}

impl fmt::Display for EvVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of an expected value computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedValueResult {
    pub success_probability: Probability,
    pub benefit_if_success: f64,
    pub failure_probability: Probability,
    pub net_loss_if_failure: f64,
    pub expected_value: f64,
    pub verdict: EvVerdict,
}

impl ExpectedValueResult {
    /// True when the expected value is strictly positive.
    ///
    /// Compares the raw value, so a sliver above zero that `verdict` labels
    /// as break-even still counts.
    pub fn is_positive(&self) -> bool {
        self.expected_value > 0.0
    }
}

/// Break-even analysis against the declared success chance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdAnalysis {
    /// Minimum success probability for EV ≥ 0, as a fraction.
    pub break_even_probability: f64,
    /// Declared success chance, in percent.
    pub declared_percent: f64,
    pub meets_threshold: bool,
    /// Declared percent minus break-even percent.
    pub safety_margin: f64,
}

impl ThresholdAnalysis {
    /// Break-even probability in percent.
    pub fn break_even_percent(&self) -> f64 {
        self.break_even_probability * 100.0
    }
}

/// One row of the sensitivity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    pub probability_percent: u8,
    pub expected_value: f64,
    pub verdict: EvVerdict,
}

/// Expected value at success rates 10%, 20%, ... 90%.
///
/// Rows are computed on demand; every call to [`SensitivityTable::iter`]
/// restarts from 10%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityTable {
    benefit: f64,
    net_loss: f64,
}

impl SensitivityTable {
    /// Number of rows in every table.
    pub const ROWS: usize = 9;

    pub fn iter(&self) -> impl Iterator<Item = SensitivityRow> + '_ {
        (1..=Self::ROWS as u8).map(move |step| {
            let percent = step * 10;
            let p = Probability::from_percent(f64::from(percent));
            let expected_value = ExpectedValueAnalyzer::expected_value(p, self.benefit, self.net_loss);
            SensitivityRow {
                probability_percent: percent,
                expected_value,
                verdict: EvVerdict::classify(expected_value),
            }
        })
    }

    /// Collects all rows.
    pub fn rows(&self) -> Vec<SensitivityRow> {
        self.iter().collect()
    }
}

/// Analyzer for expected value, break-even threshold and sensitivity.
pub struct ExpectedValueAnalyzer;

impl ExpectedValueAnalyzer {
    /// Raw EV formula.
    pub fn expected_value(p: Probability, benefit: f64, net_loss: f64) -> f64 {
        p.value() * benefit - p.complement().value() * net_loss
    }

    /// Binary framing: success with probability `p`, otherwise lose `net_loss`.
    pub fn compute_ev(p: Probability, benefit: f64, net_loss: f64) -> ExpectedValueResult {
        let expected_value = Self::expected_value(p, benefit, net_loss);
        ExpectedValueResult {
            success_probability: p,
            benefit_if_success: benefit,
            failure_probability: p.complement(),
            net_loss_if_failure: net_loss,
            expected_value,
            verdict: EvVerdict::classify(expected_value),
        }
    }

    /// Declared good/bad scenarios, each with its own chance in percent.
    ///
    /// The two chances are taken as given and need not sum to 100.
    pub fn compute_declared(
        good_chance_percent: f64,
        good_value: f64,
        bad_chance_percent: f64,
        bad_cost: f64,
    ) -> ExpectedValueResult {
        let good = Probability::from_percent(good_chance_percent);
        let bad = Probability::from_percent(bad_chance_percent);
        let expected_value = good.value() * good_value - bad.value() * bad_cost;
        ExpectedValueResult {
            success_probability: good,
            benefit_if_success: good_value,
            failure_probability: bad,
            net_loss_if_failure: bad_cost,
            expected_value,
            verdict: EvVerdict::classify(expected_value),
        }
    }

    /// Break-even analysis.
    ///
    /// Returns `None` when `benefit + net_loss` is zero (insufficient data).
    pub fn compute_threshold(
        benefit: f64,
        net_loss: f64,
        declared_percent: f64,
    ) -> Option<ThresholdAnalysis> {
        let denominator = benefit + net_loss;
        if denominator == 0.0 || !denominator.is_finite() {
            return None;
        }

        let break_even_probability = net_loss / denominator;
        let break_even_percent = break_even_probability * 100.0;

        Some(ThresholdAnalysis {
            break_even_probability,
            declared_percent,
            meets_threshold: declared_percent >= break_even_percent,
            safety_margin: declared_percent - break_even_percent,
        })
    }

    /// Builds the 9-row sensitivity table.
    pub fn sensitivity_table(benefit: f64, net_loss: f64) -> SensitivityTable {
        SensitivityTable { benefit, net_loss }
    }
}
