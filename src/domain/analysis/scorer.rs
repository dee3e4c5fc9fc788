//! Quick Assessment Scorer - six weighted criteria into a composite score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::bias_assessor::{BiasAssessment, BiasAssessor, BiasSeverity};
use super::expected_value::ExpectedValueResult;
use super::financial::FinancialMetrics;
use super::recommendation::Recommendation;
use crate::domain::assessment::DecisionInput;
use crate::domain::foundation::{affirmed, RegretLevel, Score, YesNo};

/// Points for passing the 3-2-1 filter.
pub const FILTER_POINTS: u8 = 15;
/// Points for an acceptable cost per use.
pub const COST_PER_USE_POINTS: u8 = 20;
/// Points for a positive expected value.
pub const EXPECTED_VALUE_POINTS: u8 = 25;
/// Points for low regret at every horizon.
pub const REGRET_POINTS: u8 = 15;
/// Maximum points for minimal bias contamination.
pub const BIAS_POINTS: u8 = 15;
/// Points when no better alternative exists.
pub const OPPORTUNITY_COST_POINTS: u8 = 10;

/// The six scored criteria, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Filter,
    CostPerUse,
    ExpectedValue,
    Regret,
    Biases,
    OpportunityCost,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Filter,
        Criterion::CostPerUse,
        Criterion::ExpectedValue,
        Criterion::Regret,
        Criterion::Biases,
        Criterion::OpportunityCost,
    ];

    pub fn max_points(&self) -> u8 {
        match self {
            Criterion::Filter => FILTER_POINTS,
            Criterion::CostPerUse => COST_PER_USE_POINTS,
            Criterion::ExpectedValue => EXPECTED_VALUE_POINTS,
            Criterion::Regret => REGRET_POINTS,
            Criterion::Biases => BIAS_POINTS,
            Criterion::OpportunityCost => OPPORTUNITY_COST_POINTS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Filter => "3-2-1 Filter",
            Criterion::CostPerUse => "Cost per Use",
            Criterion::ExpectedValue => "Expected Value",
            Criterion::Regret => "Low Regret",
            Criterion::Biases => "Minimal Biases",
            Criterion::OpportunityCost => "No Better Alternative",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of a single criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub passed: bool,
    pub points: u8,
    pub max_points: u8,
    pub detail: String,
}

impl CriterionScore {
    fn all_or_nothing(criterion: Criterion, passed: bool, detail: String) -> Self {
        Self {
            passed,
            points: if passed { criterion.max_points() } else { 0 },
            max_points: criterion.max_points(),
            detail,
        }
    }
}

/// Per-criterion result plus the values shown next to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub filter: CriterionScore,
    pub cost_per_use: CriterionScore,
    pub expected_value: CriterionScore,
    pub regret: CriterionScore,
    pub biases: CriterionScore,
    pub opportunity_cost: CriterionScore,

    pub cost_per_use_value: Option<f64>,
    pub expected_value_amount: f64,
    pub bias_assessment: BiasAssessment,
    pub reversibility: Vec<String>,
    pub opportunity_cost_note: String,
}

impl ScoreBreakdown {
    /// Result for one criterion.
    pub fn criterion(&self, criterion: Criterion) -> &CriterionScore {
        match criterion {
            Criterion::Filter => &self.filter,
            Criterion::CostPerUse => &self.cost_per_use,
            Criterion::ExpectedValue => &self.expected_value,
            Criterion::Regret => &self.regret,
            Criterion::Biases => &self.biases,
            Criterion::OpportunityCost => &self.opportunity_cost,
        }
    }

    /// All six criteria in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &CriterionScore)> + '_ {
        Criterion::ALL.iter().map(move |c| (*c, self.criterion(*c)))
    }

    /// Sum of awarded points.
    pub fn total(&self) -> Score {
        let sum: u32 = self.iter().map(|(_, s)| u32::from(s.points)).sum();
        Score::new(u8::try_from(sum).unwrap_or(u8::MAX))
    }

    /// Number of criteria that did not pass.
    pub fn failed_count(&self) -> usize {
        self.iter().filter(|(_, s)| !s.passed).count()
    }
}

/// Breakdown and recommendation for one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAssessment {
    pub breakdown: ScoreBreakdown,
    pub recommendation: Recommendation,
}

/// Scorer for the quick assessment.
pub struct QuickAssessmentScorer;

impl QuickAssessmentScorer {
    /// Evaluates the six criteria in order and maps the total to a tier.
    pub fn score(
        input: &DecisionInput,
        metrics: &FinancialMetrics,
        ev: &ExpectedValueResult,
    ) -> ScoredAssessment {
        let bias_assessment = BiasAssessor::assess(&input.biases);

        let breakdown = ScoreBreakdown {
            filter: Self::filter(input),
            cost_per_use: Self::cost_per_use(input, metrics),
            expected_value: Self::expected_value(ev),
            regret: Self::regret(input),
            biases: Self::biases(&bias_assessment),
            opportunity_cost: Self::opportunity_cost(input),
            cost_per_use_value: metrics.cost_per_use,
            expected_value_amount: ev.expected_value,
            bias_assessment,
            reversibility: input.reversibility_options.iter().cloned().collect(),
            opportunity_cost_note: input.opportunity_cost.clone(),
        };

        let recommendation = Recommendation::for_score(breakdown.total());
        ScoredAssessment {
            breakdown,
            recommendation,
        }
    }

    /// Points for a bias count: ≤2 → 15, ≤5 → 10, ≤10 → 5, else 0.
    pub fn bias_points(severity: BiasSeverity) -> u8 {
        match severity {
            BiasSeverity::Low => BIAS_POINTS,
            BiasSeverity::Moderate => 10,
            BiasSeverity::High => 5,
            BiasSeverity::Severe => 0,
        }
    }

    fn filter(input: &DecisionInput) -> CriterionScore {
        let f = &input.filters;
        let passed = affirmed(f.three_uses) && affirmed(f.two_benefits) && affirmed(f.one_regret);
        let detail = format!(
            "3 uses: {}, 2 benefits: {}, 1 regret: {}",
            answer(f.three_uses),
            answer(f.two_benefits),
            answer(f.one_regret)
        );
        CriterionScore::all_or_nothing(Criterion::Filter, passed, detail)
    }

    // The user's own acceptability judgment decides the pass, not the number.
    fn cost_per_use(input: &DecisionInput, metrics: &FinancialMetrics) -> CriterionScore {
        let passed = affirmed(input.cpu_acceptable);
        let detail = match metrics.cost_per_use {
            Some(cpu) => format!("{:.2} per use", cpu),
            None => "cost per use unavailable".to_string(),
        };
        CriterionScore::all_or_nothing(Criterion::CostPerUse, passed, detail)
    }

    fn expected_value(ev: &ExpectedValueResult) -> CriterionScore {
        let detail = format!("{:.2} ({})", ev.expected_value, ev.verdict);
        CriterionScore::all_or_nothing(Criterion::ExpectedValue, ev.is_positive(), detail)
    }

    fn regret(input: &DecisionInput) -> CriterionScore {
        let r = &input.regret;
        let detail = format!(
            "10 days: {}, 10 months: {}, 10 years: {}",
            regret(r.ten_days),
            regret(r.ten_months),
            regret(r.ten_years)
        );
        CriterionScore::all_or_nothing(Criterion::Regret, r.all_low(), detail)
    }

    fn biases(assessment: &BiasAssessment) -> CriterionScore {
        CriterionScore {
            passed: assessment.severity == BiasSeverity::Low,
            points: Self::bias_points(assessment.severity),
            max_points: BIAS_POINTS,
            detail: format!(
                "{} of 23 biases detected ({})",
                assessment.count, assessment.severity
            ),
        }
    }

    fn opportunity_cost(input: &DecisionInput) -> CriterionScore {
        let passed = input.alternative_better == Some(YesNo::No);
        let detail = format!("Better alternative exists: {}", answer(input.alternative_better));
        CriterionScore::all_or_nothing(Criterion::OpportunityCost, passed, detail)
    }
}

fn answer(value: Option<YesNo>) -> &'static str {
    value.map(|v| v.label()).unwrap_or("unanswered")
}

fn regret(value: Option<RegretLevel>) -> &'static str {
    value.map(|v| v.label()).unwrap_or("unanswered")
}
