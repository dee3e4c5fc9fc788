//! Decision records and their outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::analysis::{Alternative, Recommendation, RecommendationTier, ScoreBreakdown};
use crate::domain::assessment::{AssessmentMode, DecisionInput};
use crate::domain::foundation::{DecisionId, Score, Timestamp};

/// What the user actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeAction {
    Purchased,
    Waited,
    Skipped,
    ChoseAlternative,
}

impl fmt::Display for OutcomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Purchased => write!(f, "Purchased"),
            Self::Waited => write!(f, "Waited"),
            Self::Skipped => write!(f, "Skipped"),
            Self::ChoseAlternative => write!(f, "Chose Alternative"),
        }
    }
}

/// How the decision turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeResult {
    Excellent,
    Good,
    Neutral,
    Disappointing,
    Regretted,
}

impl OutcomeResult {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Disappointing => "Disappointing",
            Self::Regretted => "Regretted",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [
            Self::Excellent,
            Self::Good,
            Self::Neutral,
            Self::Disappointing,
            Self::Regretted,
        ]
        .into_iter()
        .find(|r| r.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for OutcomeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether the recommendation proved right in hindsight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correctness {
    Yes,
    No,
    Partially,
}

impl Correctness {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Partially => "partially",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "partially" => Some(Self::Partially),
            _ => None,
        }
    }
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome attached to a record after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub action: OutcomeAction,
    pub result: OutcomeResult,
    pub recorded_at: Timestamp,
    pub was_correct: Correctness,
    pub notes: String,
}

impl Outcome {
    pub fn new(
        action: OutcomeAction,
        result: OutcomeResult,
        was_correct: Correctness,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            action,
            result,
            recorded_at: Timestamp::now(),
            was_correct,
            notes: notes.into(),
        }
    }
}

/// A scored decision kept in history.
///
/// Everything except `outcome` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    id: DecisionId,
    created_at: Timestamp,
    title: String,
    mode: AssessmentMode,
    score: Score,
    recommendation: RecommendationTier,
    input: DecisionInput,
    breakdown: ScoreBreakdown,
    alternatives: Option<Vec<Alternative>>,
    outcome: Option<Outcome>,
}

impl DecisionRecord {
    /// Creates a record stamped with the current time.
    pub fn new(
        mode: AssessmentMode,
        input: DecisionInput,
        breakdown: ScoreBreakdown,
        recommendation: Recommendation,
        alternatives: Option<Vec<Alternative>>,
    ) -> Self {
        Self {
            id: DecisionId::new(),
            created_at: Timestamp::now(),
            title: input.title().to_string(),
            mode,
            score: recommendation.score,
            recommendation: recommendation.tier,
            input,
            breakdown,
            alternatives: alternatives.filter(|alts| !alts.is_empty()),
            outcome: None,
        }
    }

    /// Overrides the creation time (builder style).
    pub fn created(mut self, at: Timestamp) -> Self {
        self.created_at = at;
        self
    }

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mode(&self) -> AssessmentMode {
        self.mode
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn recommendation(&self) -> RecommendationTier {
        self.recommendation
    }

    pub fn input(&self) -> &DecisionInput {
        &self.input
    }

    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }

    pub fn alternatives(&self) -> Option<&[Alternative]> {
        self.alternatives.as_deref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn has_outcome(&self) -> bool {
        self.outcome.is_some()
    }

    /// Records or replaces the outcome.
    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{ExpectedValueAnalyzer, FinancialCalculator, QuickAssessmentScorer};

    fn record(input: DecisionInput) -> DecisionRecord {
        let metrics = FinancialCalculator::compute(&input);
        let ev = ExpectedValueAnalyzer::compute_declared(0.0, 0.0, 0.0, 0.0);
        let scored = QuickAssessmentScorer::score(&input, &metrics, &ev);
        DecisionRecord::new(
            AssessmentMode::Quick,
            input,
            scored.breakdown,
            scored.recommendation,
            Some(vec![]),
        )
    }

    #[test]
    fn new_record_takes_title_and_score() {
        let r = record(DecisionInput {
            decision_what: "Standing desk".into(),
            ..Default::default()
        });
        assert_eq!(r.title(), "Standing desk");
        assert_eq!(r.score().value(), 15);
        assert_eq!(r.recommendation(), RecommendationTier::No);
        assert!(!r.has_outcome());
    }

    #[test]
    fn blank_title_becomes_unnamed() {
        assert_eq!(record(DecisionInput::default()).title(), "Unnamed Decision");
    }

    #[test]
    fn empty_alternatives_are_not_stored() {
        assert!(record(DecisionInput::default()).alternatives().is_none());
    }

    #[test]
    fn set_outcome_replaces_previous() {
        let mut r = record(DecisionInput::default());
        r.set_outcome(Outcome::new(
            OutcomeAction::Skipped,
            OutcomeResult::Neutral,
            Correctness::Partially,
            "",
        ));
        r.set_outcome(Outcome::new(
            OutcomeAction::Skipped,
            OutcomeResult::Good,
            Correctness::Yes,
            "Glad I waited",
        ));
        let outcome = r.outcome().unwrap();
        assert_eq!(outcome.result, OutcomeResult::Good);
        assert_eq!(outcome.notes, "Glad I waited");
    }

    #[test]
    fn labels_parse_back() {
        assert_eq!(OutcomeResult::from_label("regretted"), Some(OutcomeResult::Regretted));
        assert_eq!(Correctness::from_label("Yes"), Some(Correctness::Yes));
        assert_eq!(Correctness::from_label("N/A"), None);
    }
}
