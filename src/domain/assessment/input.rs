//! Decision input - the raw answers describing one purchase decision.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::{RegretLevel, YesNo};

/// How thoroughly the decision was assessed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentMode {
    #[default]
    Quick,
    Detailed,
}

impl fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentMode::Quick => write!(f, "quick"),
            AssessmentMode::Detailed => write!(f, "detailed"),
        }
    }
}

/// The three 3-2-1 filter answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterAnswers {
    /// Will it be used at least three times?
    pub three_uses: Option<YesNo>,
    /// Does it deliver at least two distinct benefits?
    pub two_benefits: Option<YesNo>,
    /// Would not buying it leave at most one regret?
    pub one_regret: Option<YesNo>,
}

impl FilterAnswers {
    pub fn new(three_uses: YesNo, two_benefits: YesNo, one_regret: YesNo) -> Self {
        Self {
            three_uses: Some(three_uses),
            two_benefits: Some(two_benefits),
            one_regret: Some(one_regret),
        }
    }
}

/// Declared good/bad scenario used for the quick expected value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredOutcomes {
    /// Chance of the good outcome, in percent.
    pub good_chance: f64,
    /// Value gained if the good outcome happens.
    pub good_value: f64,
    /// Chance of the bad outcome, in percent.
    pub bad_chance: f64,
    /// Cost incurred if the bad outcome happens.
    pub bad_cost: f64,
}

/// Anticipated regret at 10 days, 10 months and 10 years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegretHorizons {
    pub ten_days: Option<RegretLevel>,
    pub ten_months: Option<RegretLevel>,
    pub ten_years: Option<RegretLevel>,
}

impl RegretHorizons {
    pub fn new(ten_days: RegretLevel, ten_months: RegretLevel, ten_years: RegretLevel) -> Self {
        Self {
            ten_days: Some(ten_days),
            ten_months: Some(ten_months),
            ten_years: Some(ten_years),
        }
    }

    /// True when every horizon is answered with None or Low.
    pub fn all_low(&self) -> bool {
        [self.ten_days, self.ten_months, self.ten_years]
            .iter()
            .all(|level| level.map(|l| l.is_low()).unwrap_or(false))
    }
}

/// Track record with a similar past purchase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalPattern {
    pub bought_similar: Option<YesNo>,
    pub similar_item: String,
    /// How much the similar item actually got used, 1 (barely) to 10 (constantly).
    pub historical_usage: u8,
    pub still_using: Option<YesNo>,
    pub buy_again: Option<YesNo>,
}

/// Everything the user declared about one purchase decision.
///
/// Numeric fields default to zero and categorical fields to unset, so a
/// partially filled input is always representable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionInput {
    pub decision_what: String,
    pub desired_outcome: String,
    pub total_budget: f64,

    pub filters: FilterAnswers,

    pub purchase_cost: f64,
    pub monthly_cost: f64,
    pub yearly_maintenance: f64,
    pub resale_value: f64,
    pub yearly_uses: u32,
    pub cpu_acceptable: Option<YesNo>,

    pub outcomes: DeclaredOutcomes,

    pub regret: RegretHorizons,
    pub reversibility_options: BTreeSet<String>,

    pub biases: BTreeSet<String>,

    pub opportunity_cost: String,
    pub alternative_better: Option<YesNo>,

    pub history: HistoricalPattern,
    /// Share of monthly discretionary budget this purchase represents.
    pub budget_percent: f64,
    pub absorb_loss: Option<YesNo>,
}

impl DecisionInput {
    /// Title used when the decision is recorded.
    pub fn title(&self) -> &str {
        let trimmed = self.decision_what.trim();
        if trimmed.is_empty() {
            "Unnamed Decision"
        } else {
            trimmed
        }
    }

    /// Worked example: a camera that fails most checks.
    pub fn sample() -> Self {
        let mut input = DecisionInput {
            decision_what: "Buy GoPro Hero 12".into(),
            desired_outcome: "Capture travel content for Instagram and YouTube".into(),
            total_budget: 200_000.0,
            filters: FilterAnswers::new(YesNo::No, YesNo::Yes, YesNo::Yes),
            purchase_cost: 45_000.0,
            monthly_cost: 500.0,
            yearly_maintenance: 3_000.0,
            resale_value: 20_000.0,
            yearly_uses: 12,
            outcomes: DeclaredOutcomes {
                good_chance: 30.0,
                good_value: 100_000.0,
                bad_chance: 70.0,
                bad_cost: 45_000.0,
            },
            regret: RegretHorizons::new(RegretLevel::Low, RegretLevel::Medium, RegretLevel::High),
            opportunity_cost: "Could take a course (15K) + fund 3 trips (30K)".into(),
            alternative_better: Some(YesNo::Yes),
            history: HistoricalPattern {
                bought_similar: Some(YesNo::Yes),
                similar_item: "DSLR camera".into(),
                historical_usage: 3,
                still_using: Some(YesNo::No),
                buy_again: Some(YesNo::No),
            },
            budget_percent: 22.5,
            absorb_loss: Some(YesNo::Yes),
            ..Default::default()
        };
        input.biases.extend(["fomo".to_string(), "social_proof".to_string()]);
        input.reversibility_options.insert("Resell".to_string());
        input
    }
}
