//! AssessDecisionHandler - Command handler for scoring a purchase decision.
//!
//! Runs the full analysis pipeline over one decision input, records the
//! result in the history and returns the report.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::analysis::{
    Alternative, AlternativesComparator, ComparisonOutcome, CostPerUseThresholds,
    DecisionDiagnostician, DecisionDiagnostics, DecisionInsights, DetailedAnalysis,
    DetailedAnalyzer, DetailedFindings, ExpectedValueAnalyzer, ExpectedValueResult,
    FinancialCalculator, FinancialMetrics, InsightGenerator, QuickAssessmentScorer,
    RatioAssessment, Recommendation, ScoreBreakdown, FAVORABLE_RATIO,
};
use crate::domain::assessment::{AssessmentMode, DecisionInput};
use crate::domain::foundation::{DecisionId, DomainError};
use crate::domain::history::DecisionRecord;
use crate::ports::DecisionHistoryRepository;

/// Tunable thresholds used while assessing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentSettings {
    pub cost_per_use: CostPerUseThresholds,
    /// Budget share above which a purchase counts as high impact.
    pub high_budget_impact_percent: f64,
    pub favorable_ratio: f64,
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            cost_per_use: CostPerUseThresholds::default(),
            high_budget_impact_percent: 30.0,
            favorable_ratio: FAVORABLE_RATIO,
        }
    }
}

/// Command to assess a decision.
#[derive(Debug, Clone, Default)]
pub struct AssessDecisionCommand {
    pub mode: AssessmentMode,
    pub input: DecisionInput,
    /// Extra detailed-mode inputs. Findings are produced only when present.
    pub detailed: Option<DetailedAnalysis>,
    /// Competing options. Unnamed entries are skipped; the rest are
    /// compared when at least one remains.
    pub alternatives: Vec<Alternative>,
}

impl AssessDecisionCommand {
    fn named_alternatives(&self) -> impl Iterator<Item = &Alternative> {
        self.alternatives.iter().filter(|a| a.is_named())
    }
}

/// Everything computed for one decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub title: String,
    pub mode: AssessmentMode,
    pub metrics: FinancialMetrics,
    pub expected_value: ExpectedValueResult,
    pub breakdown: ScoreBreakdown,
    pub recommendation: Recommendation,
    pub guidance: String,
    pub diagnostics: DecisionDiagnostics,
    pub insights: DecisionInsights,
    pub detailed: Option<DetailedFindings>,
    /// Risk/reward reading, when detailed scenarios were supplied.
    pub risk_assessment: Option<RatioAssessment>,
    pub comparison: Option<ComparisonOutcome>,
}

/// Result of assessing and recording a decision.
#[derive(Debug, Clone)]
pub struct AssessDecisionResult {
    pub decision_id: DecisionId,
    pub report: AssessmentReport,
}

/// Handler for assessing decisions.
pub struct AssessDecisionHandler {
    repository: Arc<dyn DecisionHistoryRepository>,
    settings: AssessmentSettings,
}

impl AssessDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionHistoryRepository>) -> Self {
        Self::with_settings(repository, AssessmentSettings::default())
    }

    pub fn with_settings(
        repository: Arc<dyn DecisionHistoryRepository>,
        settings: AssessmentSettings,
    ) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Scores the decision without recording it.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if a named alternative's effort or effectiveness is invalid
    pub fn evaluate(&self, cmd: &AssessDecisionCommand) -> Result<AssessmentReport, DomainError> {
        let named: Vec<Alternative> = cmd.named_alternatives().cloned().collect();
        for alternative in &named {
            alternative.validate()?;
        }

        let input = &cmd.input;
        let metrics = FinancialCalculator::compute(input);
        let o = &input.outcomes;
        let ev = ExpectedValueAnalyzer::compute_declared(
            o.good_chance,
            o.good_value,
            o.bad_chance,
            o.bad_cost,
        );
        let scored = QuickAssessmentScorer::score(input, &metrics, &ev);

        let detailed = cmd
            .detailed
            .as_ref()
            .map(|analysis| DetailedAnalyzer::analyze(input, analysis, &self.settings.cost_per_use));
        let risk_assessment = detailed
            .as_ref()
            .and_then(|f| f.risk_profile.as_ref())
            .map(|p| p.risk_reward_ratio.assess(self.settings.favorable_ratio));

        let diagnostics = DecisionDiagnostician::diagnose(
            input,
            &metrics,
            &ev,
            &scored.breakdown,
            self.settings.high_budget_impact_percent,
        );
        let tier = scored.recommendation.tier;
        let insights = InsightGenerator::generate(&scored.breakdown, tier, detailed.as_ref());

        let comparison = (!named.is_empty()).then(|| AlternativesComparator::compare_all(&named));

        Ok(AssessmentReport {
            title: input.title().to_string(),
            mode: cmd.mode,
            metrics,
            expected_value: ev,
            breakdown: scored.breakdown,
            recommendation: scored.recommendation,
            guidance: tier.guidance().to_string(),
            diagnostics,
            insights,
            detailed,
            risk_assessment,
            comparison,
        })
    }

    pub async fn handle(
        &self,
        cmd: AssessDecisionCommand,
    ) -> Result<AssessDecisionResult, DomainError> {
        let report = self.evaluate(&cmd)?;

        let alternatives: Vec<Alternative> = cmd.named_alternatives().cloned().collect();
        let record = DecisionRecord::new(
            cmd.mode,
            cmd.input,
            report.breakdown.clone(),
            report.recommendation,
            Some(alternatives),
        );
        let decision_id = self.repository.save(record).await?;

        tracing::info!(
            decision_id = %decision_id,
            score = report.recommendation.score.value(),
            tier = %report.recommendation.tier,
            mode = %report.mode,
            "Decision assessed"
        );

        Ok(AssessDecisionResult {
            decision_id,
            report,
        })
    }
}
