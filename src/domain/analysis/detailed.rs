//! Detailed-analysis helpers: probability builder, cost-per-use verdict,
//! and benefits-versus-costs weighing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expected_value::{
    ExpectedValueAnalyzer, ExpectedValueResult, SensitivityRow, ThresholdAnalysis,
};
use super::risk_profiler::{RiskProfile, RiskProfiler, RiskScenario};
use crate::domain::assessment::DecisionInput;
use crate::domain::foundation::Probability;

/// Base rate plus signed adjustments, all in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessProbabilityEstimate {
    pub base_rate: i32,
    pub motivation: i32,
    pub overlap: i32,
    pub time: i32,
    pub track_record: i32,
}

impl Default for SuccessProbabilityEstimate {
    fn default() -> Self {
        Self {
            base_rate: 50,
            motivation: 0,
            overlap: 0,
            time: 0,
            track_record: 0,
        }
    }
}

impl SuccessProbabilityEstimate {
    /// Sum of base rate and adjustments, clamped to 0-100.
    pub fn percent(&self) -> i32 {
        let sum = self.base_rate + self.motivation + self.overlap + self.time + self.track_record;
        sum.clamp(0, 100)
    }

    pub fn probability(&self) -> Probability {
        Probability::from_percent(f64::from(self.percent()))
    }
}

/// Cut-offs for the cost-per-use verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPerUseThresholds {
    pub good_below: f64,
    pub acceptable_below: f64,
}

impl Default for CostPerUseThresholds {
    fn default() -> Self {
        Self {
            good_below: 500.0,
            acceptable_below: 2000.0,
        }
    }
}

/// Reading of a cost per use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostPerUseVerdict {
    Good,
    Acceptable,
    High,
}

impl CostPerUseVerdict {
    pub fn classify(cost_per_use: f64, thresholds: &CostPerUseThresholds) -> Self {
        if cost_per_use < thresholds.good_below {
            CostPerUseVerdict::Good
        } else if cost_per_use < thresholds.acceptable_below {
            CostPerUseVerdict::Acceptable
        } else {
            CostPerUseVerdict::High
        }
    }
}

impl fmt::Display for CostPerUseVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostPerUseVerdict::Good => write!(f, "Good value"),
            CostPerUseVerdict::Acceptable => write!(f, "Acceptable"),
            CostPerUseVerdict::High => write!(f, "High cost per use"),
        }
    }
}

/// Purchase cost spread over realistic uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPerUseSnapshot {
    pub realistic_uses: u32,
    pub total_cost: f64,
    pub cost_per_use: f64,
    pub verdict: CostPerUseVerdict,
}

impl CostPerUseSnapshot {
    /// Returns `None` unless both cost and uses are positive.
    pub fn evaluate(
        total_cost: f64,
        realistic_uses: u32,
        thresholds: &CostPerUseThresholds,
    ) -> Option<Self> {
        if realistic_uses == 0 || total_cost <= 0.0 {
            return None;
        }
        let cost_per_use = total_cost / f64::from(realistic_uses);
        Some(Self {
            realistic_uses,
            total_cost,
            cost_per_use,
            verdict: CostPerUseVerdict::classify(cost_per_use, thresholds),
        })
    }
}

/// How often a benefit is felt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Rarely,
}

impl BenefitFrequency {
    pub fn multiplier(&self) -> f64 {
        match self {
            BenefitFrequency::Daily => 1.5,
            BenefitFrequency::Weekly => 1.2,
            BenefitFrequency::Monthly => 1.0,
            BenefitFrequency::Rarely => 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitEntry {
    pub description: String,
    pub frequency: BenefitFrequency,
    /// 1-5.
    pub importance: u8,
}

impl BenefitEntry {
    pub fn new(description: impl Into<String>, frequency: BenefitFrequency, importance: u8) -> Self {
        Self {
            description: description.into(),
            frequency,
            importance,
        }
    }
}

/// What a cost is paid in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostKind {
    #[default]
    Money,
    Time,
    Energy,
    Clutter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    pub item: String,
    pub kind: CostKind,
    pub value: String,
    /// 1-5.
    pub weight: u8,
}

impl CostEntry {
    pub fn new(item: impl Into<String>, kind: CostKind, weight: u8) -> Self {
        Self {
            item: item.into(),
            kind,
            value: String::new(),
            weight,
        }
    }
}

/// Which side of the ledger dominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeighingVerdict {
    BenefitsOutweigh,
    Balanced,
    CostsOutweigh,
}

/// Both sides normalised to 0-50.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeighingResult {
    pub benefits_score: f64,
    pub costs_score: f64,
    pub verdict: WeighingVerdict,
}

/// Maximum score on either side of the weighing.
pub const WEIGHING_CAP: f64 = 50.0;

/// A side must exceed the other by this factor to dominate.
const DOMINANCE_FACTOR: f64 = 1.2;

pub struct BenefitsCostsWeigher;

impl BenefitsCostsWeigher {
    /// Removed entries (`None`) are skipped.
    pub fn benefits_score(benefits: &[Option<BenefitEntry>]) -> f64 {
        let raw: f64 = benefits
            .iter()
            .flatten()
            .map(|b| f64::from(b.importance) * b.frequency.multiplier())
            .sum();
        (raw * 2.0).min(WEIGHING_CAP)
    }

    pub fn costs_score(costs: &[Option<CostEntry>]) -> f64 {
        let raw: f64 = costs.iter().flatten().map(|c| f64::from(c.weight)).sum();
        (raw * 2.5).min(WEIGHING_CAP)
    }

    pub fn weigh(benefits: &[Option<BenefitEntry>], costs: &[Option<CostEntry>]) -> WeighingResult {
        let benefits_score = Self::benefits_score(benefits);
        let costs_score = Self::costs_score(costs);

        let verdict = if benefits_score > costs_score * DOMINANCE_FACTOR {
            WeighingVerdict::BenefitsOutweigh
        } else if costs_score > benefits_score * DOMINANCE_FACTOR {
            WeighingVerdict::CostsOutweigh
        } else {
            WeighingVerdict::Balanced
        };

        WeighingResult {
            benefits_score,
            costs_score,
            verdict,
        }
    }
}

/// Worst, base and best scenarios for the risk profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScenarios {
    pub worst: RiskScenario,
    pub base: RiskScenario,
    pub best: RiskScenario,
}

/// Extra answers collected by a detailed assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAnalysis {
    pub estimate: SuccessProbabilityEstimate,
    /// Realistic number of uses over the item's life.
    pub realistic_uses: u32,
    pub benefit_if_success: f64,
    pub benefits: Vec<Option<BenefitEntry>>,
    pub costs: Vec<Option<CostEntry>>,
    pub scenarios: Option<RiskScenarios>,
}

/// Everything derived from a detailed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedFindings {
    pub success_probability: Probability,
    pub cost_per_use: Option<CostPerUseSnapshot>,
    pub expected_value: ExpectedValueResult,
    pub threshold: Option<ThresholdAnalysis>,
    pub sensitivity: Vec<SensitivityRow>,
    pub weighing: WeighingResult,
    pub risk_profile: Option<RiskProfile>,
}

pub struct DetailedAnalyzer;

impl DetailedAnalyzer {
    /// Runs the binary EV framing with the built probability and the
    /// purchase's net loss (cost minus resale).
    pub fn analyze(
        input: &DecisionInput,
        analysis: &DetailedAnalysis,
        thresholds: &CostPerUseThresholds,
    ) -> DetailedFindings {
        let p = analysis.estimate.probability();
        let net_loss = input.purchase_cost - input.resale_value;
        let benefit = analysis.benefit_if_success;

        DetailedFindings {
            success_probability: p,
            cost_per_use: CostPerUseSnapshot::evaluate(
                input.purchase_cost,
                analysis.realistic_uses,
                thresholds,
            ),
            expected_value: ExpectedValueAnalyzer::compute_ev(p, benefit, net_loss),
            threshold: ExpectedValueAnalyzer::compute_threshold(benefit, net_loss, p.as_percent()),
            sensitivity: ExpectedValueAnalyzer::sensitivity_table(benefit, net_loss).rows(),
            weighing: BenefitsCostsWeigher::weigh(&analysis.benefits, &analysis.costs),
            risk_profile: analysis.scenarios.as_ref().map(|s| {
                RiskProfiler::profile(s.worst.clone(), s.base.clone(), s.best.clone())
            }),
        }
    }
}
