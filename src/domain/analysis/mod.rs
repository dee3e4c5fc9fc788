//! Analysis Module - Pure domain services for purchase decision analysis.
//!
//! This module contains stateless functions that turn a `DecisionInput`
//! into metrics, a composite score and a recommendation.
//!
//! # Components
//!
//! - `FinancialCalculator` - Year-1/year-3 cost, cost per use, sunk-cost risk
//! - `ExpectedValueAnalyzer` - EV, break-even threshold, sensitivity table
//! - `RiskProfiler` - Worst/base/best weighting and risk/reward ratio
//! - `BiasAssessor` - 23-bias taxonomy lookup and severity tiers
//! - `QuickAssessmentScorer` - Six criteria into a 0-100 score and tier
//! - `AlternativesComparator` - Value-density ranking of competing options
//! - `DetailedAnalyzer` - Probability builder, benefits/costs weighing
//! - `DecisionDiagnostician` / `InsightGenerator` - Derived readings and advice
//!
//! All functions are pure (no side effects). Missing denominators are
//! reported as `None` or a dedicated variant, never as an error.

mod alternatives;
mod bias_assessor;
mod detailed;
mod diagnostics;
mod expected_value;
mod financial;
mod insights;
mod recommendation;
mod risk_profiler;
mod scorer;

pub use alternatives::{
    Alternative, AlternativeKind, AlternativesComparator, ComparisonOutcome, ComparisonResult,
    ComparisonWorksheet, RankedAlternative, ValueScore, MIN_ALTERNATIVES,
};
pub use bias_assessor::{
    BiasAssessment, BiasAssessor, BiasCategory, BiasDefinition, BiasSeverity, CategoryExposure,
    BIAS_TAXONOMY, TAXONOMY_SIZE,
};
pub use detailed::{
    BenefitEntry, BenefitFrequency, BenefitsCostsWeigher, CostEntry, CostKind,
    CostPerUseSnapshot, CostPerUseThresholds, CostPerUseVerdict, DetailedAnalysis,
    DetailedAnalyzer, DetailedFindings, RiskScenarios, SuccessProbabilityEstimate,
    WeighingResult, WeighingVerdict, WEIGHING_CAP,
};
pub use diagnostics::{
    BudgetImpact, BudgetImpactBand, CostComposition, DecisionDiagnostician, DecisionDiagnostics,
    RiskQuadrant, UsageRealism, REVERSIBILITY_OPTIONS,
};
pub use expected_value::{
    EvVerdict, ExpectedValueAnalyzer, ExpectedValueResult, SensitivityRow, SensitivityTable,
    ThresholdAnalysis, EV_EPSILON,
};
pub use financial::{FinancialCalculator, FinancialMetrics};
pub use insights::{
    DecisionInsights, EmotionalOutlook, FinancialStrength, InsightGenerator, PsychologicalClarity,
};
pub use recommendation::{Recommendation, RecommendationTier};
pub use risk_profiler::{
    RatioAssessment, RiskProfile, RiskProfiler, RiskRewardRatio, RiskScenario, FAVORABLE_RATIO,
};
pub use scorer::{
    Criterion, CriterionScore, QuickAssessmentScorer, ScoreBreakdown, ScoredAssessment,
    BIAS_POINTS, COST_PER_USE_POINTS, EXPECTED_VALUE_POINTS, FILTER_POINTS,
    OPPORTUNITY_COST_POINTS, REGRET_POINTS,
};
