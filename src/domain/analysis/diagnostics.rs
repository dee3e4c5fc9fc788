//! Decision diagnostics derived from the input, its metrics and its score.

use serde::{Deserialize, Serialize};

use super::bias_assessor::TAXONOMY_SIZE;
use super::expected_value::ExpectedValueResult;
use super::financial::FinancialMetrics;
use super::scorer::ScoreBreakdown;
use crate::domain::assessment::DecisionInput;
use crate::domain::foundation::affirmed;

/// Number of reversibility options a user can pick from.
pub const REVERSIBILITY_OPTIONS: usize = 4;

/// Budget impact assumed for the risk quadrant when no budget is given.
const ASSUMED_IMPACT_WITHOUT_BUDGET: f64 = 50.0;

/// How heavily year-one cost weighs on the total budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetImpactBand {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl BudgetImpactBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 60.0 {
            BudgetImpactBand::VeryHigh
        } else if percent > 40.0 {
            BudgetImpactBand::High
        } else if percent > 20.0 {
            BudgetImpactBand::Moderate
        } else {
            BudgetImpactBand::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetImpact {
    pub percent: f64,
    pub band: BudgetImpactBand,
}

/// Share of year-one cost by source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostComposition {
    pub purchase_percent: f64,
    pub recurring_percent: f64,
    pub maintenance_percent: f64,
}

/// Predicted uses adjusted by the track record of a similar purchase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageRealism {
    pub predicted_uses: u32,
    pub realistic_uses: u32,
    /// `None` when no uses were predicted.
    pub utilization_percent: Option<f64>,
}

/// Position on the probability × impact grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskQuadrant {
    /// High impact, high probability.
    Danger,
    /// High impact, low probability.
    Caution,
    /// Low impact, high probability.
    Monitor,
    Safe,
}

impl RiskQuadrant {
    pub fn from_axes(high_impact: bool, high_probability: bool) -> Self {
        match (high_impact, high_probability) {
            (true, true) => RiskQuadrant::Danger,
            (true, false) => RiskQuadrant::Caution,
            (false, true) => RiskQuadrant::Monitor,
            (false, false) => RiskQuadrant::Safe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDiagnostics {
    pub budget_impact: Option<BudgetImpact>,
    pub cost_composition: Option<CostComposition>,
    pub usage: UsageRealism,
    pub reversibility_percent: f64,
    /// Detected biases as a share of the taxonomy.
    pub bias_contamination_percent: f64,
    pub risk_quadrant: RiskQuadrant,
    pub rational_confidence: f64,
}

pub struct DecisionDiagnostician;

impl DecisionDiagnostician {
    pub fn diagnose(
        input: &DecisionInput,
        metrics: &FinancialMetrics,
        ev: &ExpectedValueResult,
        breakdown: &ScoreBreakdown,
        high_impact_percent: f64,
    ) -> DecisionDiagnostics {
        let budget_impact = Self::budget_impact(metrics.year1_cost, input.total_budget);
        let bias_count = breakdown.bias_assessment.count;

        let impact_for_quadrant = budget_impact
            .map(|b| b.percent)
            .unwrap_or(ASSUMED_IMPACT_WITHOUT_BUDGET);
        let high_impact = impact_for_quadrant > high_impact_percent || ev.expected_value < 0.0;
        let high_probability = input.outcomes.good_chance > 50.0;

        DecisionDiagnostics {
            budget_impact,
            cost_composition: Self::cost_composition(input),
            usage: Self::usage_realism(input),
            reversibility_percent: Self::reversibility_percent(input.reversibility_options.len()),
            bias_contamination_percent: Self::bias_contamination(bias_count),
            risk_quadrant: RiskQuadrant::from_axes(high_impact, high_probability),
            rational_confidence: Self::rational_confidence(bias_count, breakdown.failed_count()),
        }
    }

    /// `None` when the budget is zero.
    pub fn budget_impact(year1_cost: f64, total_budget: f64) -> Option<BudgetImpact> {
        if total_budget <= 0.0 {
            return None;
        }
        let percent = year1_cost / total_budget * 100.0;
        Some(BudgetImpact {
            percent,
            band: BudgetImpactBand::from_percent(percent),
        })
    }

    pub fn cost_composition(input: &DecisionInput) -> Option<CostComposition> {
        let recurring = input.monthly_cost * 12.0;
        let total = input.purchase_cost + recurring + input.yearly_maintenance;
        if total <= 0.0 {
            return None;
        }
        Some(CostComposition {
            purchase_percent: input.purchase_cost / total * 100.0,
            recurring_percent: recurring / total * 100.0,
            maintenance_percent: input.yearly_maintenance / total * 100.0,
        })
    }

    pub fn usage_realism(input: &DecisionInput) -> UsageRealism {
        let predicted = input.yearly_uses;
        let history = &input.history;

        let realistic = if affirmed(history.bought_similar) && history.historical_usage > 0 {
            let factor = f64::from(history.historical_usage.min(10)) / 10.0;
            (f64::from(predicted) * factor).round() as u32
        } else {
            predicted
        };

        let utilization_percent = if predicted == 0 {
            None
        } else {
            Some(f64::from(realistic) / f64::from(predicted) * 100.0)
        };

        UsageRealism {
            predicted_uses: predicted,
            realistic_uses: realistic,
            utilization_percent,
        }
    }

    pub fn reversibility_percent(chosen: usize) -> f64 {
        (chosen as f64 / REVERSIBILITY_OPTIONS as f64 * 100.0).min(100.0)
    }

    pub fn bias_contamination(bias_count: usize) -> f64 {
        bias_count as f64 / TAXONOMY_SIZE as f64 * 100.0
    }

    /// 100 minus bias contamination minus 10 per failed criterion, floored at 0.
    pub fn rational_confidence(bias_count: usize, failed_criteria: usize) -> f64 {
        let confidence =
            100.0 - Self::bias_contamination(bias_count) - failed_criteria as f64 * 10.0;
        confidence.max(0.0)
    }
}
