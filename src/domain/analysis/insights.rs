//! Insight generation - reasons, concerns and next actions for a scored decision.

use serde::{Deserialize, Serialize};

use super::bias_assessor::BiasSeverity;
use super::detailed::{CostPerUseVerdict, DetailedFindings};
use super::expected_value::EvVerdict;
use super::recommendation::RecommendationTier;
use super::scorer::ScoreBreakdown;

const PROCEED_ACTIONS: &[&str] = &[
    "Proceed with the purchase confidently",
    "Set calendar reminder to evaluate actual usage after 3 months",
    "Document your decision rationale for future reference",
    "Track actual costs vs. predicted costs",
];

const WAIT_ACTIONS: &[&str] = &[
    "Wait at least 48-72 hours before making final decision",
    "Test or trial the product/service if possible (free trials, demos)",
    "Research alternatives more thoroughly - create comparison spreadsheet",
    "Review identified biases and counter them with objective data",
    "Discuss with someone who won't benefit from your purchase",
];

const SKIP_ACTIONS: &[&str] = &[
    "Skip this purchase - the numbers don't support it",
    "Explore the identified alternatives that may serve you better",
    "Save the money or redirect to higher-ROI investments",
    "Revisit this decision in 3-6 months with fresh perspective",
    "Journal why you wanted this - address the underlying need differently",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStrength {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PsychologicalClarity {
    Excellent,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalOutlook {
    Positive,
    Uncertain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionInsights {
    pub supporting_reasons: Vec<String>,
    pub concerns: Vec<String>,
    pub next_actions: Vec<String>,
    pub financial_strength: FinancialStrength,
    pub psychological_clarity: PsychologicalClarity,
    pub emotional_outlook: EmotionalOutlook,
}

pub struct InsightGenerator;

impl InsightGenerator {
    pub fn generate(
        breakdown: &ScoreBreakdown,
        tier: RecommendationTier,
        detailed: Option<&DetailedFindings>,
    ) -> DecisionInsights {
        let mut supporting_reasons = Vec::new();
        let mut concerns = Vec::new();

        let mut note = |passed: bool, reason: String, concern: String| {
            if passed {
                supporting_reasons.push(reason);
            } else {
                concerns.push(concern);
            }
        };

        note(
            breakdown.filter.passed,
            "Passes the 3-2-1 practical usage test".into(),
            "Does not pass the 3-2-1 filter".into(),
        );
        note(
            breakdown.cost_per_use.passed,
            "Cost per use is acceptable".into(),
            "Cost per use is too high".into(),
        );
        note(
            breakdown.expected_value.passed,
            "Positive expected value".into(),
            "Negative or neutral expected value".into(),
        );
        note(
            breakdown.regret.passed,
            "Low predicted regret".into(),
            "Potential for future regret".into(),
        );
        note(
            breakdown.biases.passed,
            "Minimal cognitive biases detected".into(),
            format!("{} cognitive biases detected", breakdown.bias_assessment.count),
        );
        note(
            breakdown.opportunity_cost.passed,
            "No clearly better alternative".into(),
            "A better alternative may exist".into(),
        );

        if let Some(findings) = detailed {
            Self::detailed_evidence(findings, &mut supporting_reasons, &mut concerns);
        }

        DecisionInsights {
            supporting_reasons,
            concerns,
            next_actions: Self::next_actions(tier)
                .iter()
                .map(|a| a.to_string())
                .collect(),
            financial_strength: Self::financial_strength(breakdown),
            psychological_clarity: Self::psychological_clarity(breakdown),
            emotional_outlook: if breakdown.regret.passed {
                EmotionalOutlook::Positive
            } else {
                EmotionalOutlook::Uncertain
            },
        }
    }

    /// GO tiers proceed, WAIT tiers wait, NO skips.
    pub fn next_actions(tier: RecommendationTier) -> &'static [&'static str] {
        if tier.is_go() {
            PROCEED_ACTIONS
        } else if tier.is_wait() {
            WAIT_ACTIONS
        } else {
            SKIP_ACTIONS
        }
    }

    fn financial_strength(breakdown: &ScoreBreakdown) -> FinancialStrength {
        match (breakdown.cost_per_use.passed, breakdown.expected_value.passed) {
            (true, true) => FinancialStrength::Strong,
            (true, false) | (false, true) => FinancialStrength::Moderate,
            (false, false) => FinancialStrength::Weak,
        }
    }

    fn psychological_clarity(breakdown: &ScoreBreakdown) -> PsychologicalClarity {
        match breakdown.bias_assessment.severity {
            BiasSeverity::Low => PsychologicalClarity::Excellent,
            BiasSeverity::Moderate => PsychologicalClarity::Fair,
            BiasSeverity::High | BiasSeverity::Severe => PsychologicalClarity::Poor,
        }
    }

    fn detailed_evidence(
        findings: &DetailedFindings,
        reasons: &mut Vec<String>,
        concerns: &mut Vec<String>,
    ) {
        if let Some(cpu) = &findings.cost_per_use {
            match cpu.verdict {
                CostPerUseVerdict::Good => {
                    reasons.push(format!("Excellent cost-per-use: {:.2}", cpu.cost_per_use))
                }
                CostPerUseVerdict::High => {
                    concerns.push(format!("High cost-per-use: {:.2}", cpu.cost_per_use))
                }
                CostPerUseVerdict::Acceptable => {}
            }
        }

        let ev = &findings.expected_value;
        match ev.verdict {
            EvVerdict::Positive => {
                reasons.push(format!("Positive expected value: +{:.0}", ev.expected_value))
            }
            EvVerdict::Negative => {
                concerns.push(format!("Negative expected value: {:.0}", ev.expected_value))
            }
            EvVerdict::Zero => {}
        }

        if let Some(threshold) = &findings.threshold {
            let declared = threshold.declared_percent;
            let needed = threshold.break_even_percent();
            if threshold.meets_threshold {
                reasons.push(format!(
                    "Success chance ({:.0}%) exceeds threshold ({:.0}%)",
                    declared, needed
                ));
            } else {
                concerns.push(format!(
                    "Success chance ({:.0}%) below threshold ({:.0}%)",
                    declared, needed
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{ExpectedValueAnalyzer, FinancialCalculator, QuickAssessmentScorer};
    use crate::domain::assessment::{DecisionInput, FilterAnswers};
    use crate::domain::foundation::YesNo;

    fn breakdown_for(input: &DecisionInput, ev: f64) -> ScoreBreakdown {
        let metrics = FinancialCalculator::compute(input);
        let ev = ExpectedValueAnalyzer::compute_declared(100.0, ev, 0.0, 0.0);
        QuickAssessmentScorer::score(input, &metrics, &ev).breakdown
    }

    #[test]
    fn each_criterion_yields_reason_or_concern() {
        let breakdown = breakdown_for(&DecisionInput::default(), 0.0);
        let insights = InsightGenerator::generate(&breakdown, RecommendationTier::No, None);
        assert_eq!(insights.supporting_reasons.len() + insights.concerns.len(), 6);
        assert_eq!(
            insights.supporting_reasons,
            vec!["Minimal cognitive biases detected".to_string()]
        );
        assert_eq!(insights.financial_strength, FinancialStrength::Weak);
        assert_eq!(insights.emotional_outlook, EmotionalOutlook::Uncertain);
    }

    #[test]
    fn next_actions_follow_tier_family() {
        assert_eq!(
            InsightGenerator::next_actions(RecommendationTier::StrongGo)[0],
            "Proceed with the purchase confidently"
        );
        assert_eq!(
            InsightGenerator::next_actions(RecommendationTier::WaitOneWeek),
            WAIT_ACTIONS
        );
        assert_eq!(
            InsightGenerator::next_actions(RecommendationTier::Wait48h),
            WAIT_ACTIONS
        );
        assert_eq!(InsightGenerator::next_actions(RecommendationTier::No), SKIP_ACTIONS);
    }

    #[test]
    fn financial_strength_is_moderate_with_one_pass() {
        let input = DecisionInput {
            filters: FilterAnswers::new(YesNo::Yes, YesNo::Yes, YesNo::Yes),
            cpu_acceptable: Some(YesNo::Yes),
            ..Default::default()
        };
        let breakdown = breakdown_for(&input, 0.0);
        let insights = InsightGenerator::generate(&breakdown, RecommendationTier::No, None);
        assert_eq!(insights.financial_strength, FinancialStrength::Moderate);
        assert_eq!(insights.psychological_clarity, PsychologicalClarity::Excellent);
    }

    #[test]
    fn concern_reports_bias_count() {
        let mut input = DecisionInput::default();
        input.biases = ["fomo", "decoy", "framing", "anchoring"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let breakdown = breakdown_for(&input, 0.0);
        let insights = InsightGenerator::generate(&breakdown, RecommendationTier::No, None);
        assert!(insights
            .concerns
            .contains(&"4 cognitive biases detected".to_string()));
        assert_eq!(insights.psychological_clarity, PsychologicalClarity::Fair);
    }
}
