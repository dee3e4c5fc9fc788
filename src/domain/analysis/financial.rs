//! Financial Metrics Calculator - ownership cost aggregation.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::DecisionInput;

/// Cost figures derived from a decision input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub year1_cost: f64,
    pub year3_cost: f64,
    /// Year-one cost divided by yearly uses; `None` when uses is zero.
    pub cost_per_use: Option<f64>,
    /// Share of the purchase not recoverable by resale; `None` when cost is zero.
    pub sunk_cost_risk_percent: Option<f64>,
    pub net_loss_if_failure: f64,
}

/// Calculator for total cost of ownership and related metrics.
pub struct FinancialCalculator;

impl FinancialCalculator {
    /// Derives all financial metrics from the input.
    pub fn compute(input: &DecisionInput) -> FinancialMetrics {
        let year1_cost = Self::year1_cost(
            input.purchase_cost,
            input.monthly_cost,
            input.yearly_maintenance,
        );

        FinancialMetrics {
            year1_cost,
            year3_cost: Self::year3_cost(
                input.purchase_cost,
                input.monthly_cost,
                input.yearly_maintenance,
            ),
            cost_per_use: Self::cost_per_use(year1_cost, input.yearly_uses),
            sunk_cost_risk_percent: Self::sunk_cost_risk(input.purchase_cost, input.resale_value),
            net_loss_if_failure: input.purchase_cost - input.resale_value,
        }
    }

    /// purchase + monthly × 12 + maintenance.
    pub fn year1_cost(purchase: f64, monthly: f64, maintenance: f64) -> f64 {
        purchase + monthly * 12.0 + maintenance
    }

    /// purchase + monthly × 36 + maintenance × 3.
    pub fn year3_cost(purchase: f64, monthly: f64, maintenance: f64) -> f64 {
        purchase + monthly * 36.0 + maintenance * 3.0
    }

    /// Cost of each use over the first year.
    pub fn cost_per_use(year1_cost: f64, yearly_uses: u32) -> Option<f64> {
        if yearly_uses == 0 {
            return None;
        }
        Some(year1_cost / f64::from(yearly_uses))
    }

    /// Percentage of the purchase cost lost if it has to be resold.
    pub fn sunk_cost_risk(purchase: f64, resale: f64) -> Option<f64> {
        if purchase == 0.0 {
            return None;
        }
        Some((purchase - resale) / purchase * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> DecisionInput {
        DecisionInput {
            purchase_cost: 45000.0,
            monthly_cost: 500.0,
            yearly_maintenance: 3000.0,
            resale_value: 20000.0,
            yearly_uses: 12,
            ..Default::default()
        }
    }

    #[test]
    fn compute_year_costs_use_fixed_multipliers() {
        let metrics = FinancialCalculator::compute(&camera());
        assert_eq!(metrics.year1_cost, 54000.0);
        assert_eq!(metrics.year3_cost, 45000.0 + 18000.0 + 9000.0);
    }

    #[test]
    fn compute_cost_per_use_divides_year1_by_uses() {
        let metrics = FinancialCalculator::compute(&camera());
        assert_eq!(metrics.cost_per_use, Some(4500.0));
    }

    #[test]
    fn cost_per_use_unavailable_without_uses() {
        let input = DecisionInput {
            yearly_uses: 0,
            ..camera()
        };
        assert!(FinancialCalculator::compute(&input).cost_per_use.is_none());
    }

    #[test]
    fn sunk_cost_risk_uses_resale_value() {
        let metrics = FinancialCalculator::compute(&camera());
        let risk = metrics.sunk_cost_risk_percent.unwrap();
        assert!((risk - 55.555_555).abs() < 1e-3);
        assert_eq!(metrics.net_loss_if_failure, 25000.0);
    }

    #[test]
    fn sunk_cost_risk_unavailable_for_free_purchase() {
        assert!(FinancialCalculator::sunk_cost_risk(0.0, 0.0).is_none());
    }

    #[test]
    fn resale_above_cost_yields_negative_risk() {
        let risk = FinancialCalculator::sunk_cost_risk(100.0, 150.0).unwrap();
        assert_eq!(risk, -50.0);
    }
}
