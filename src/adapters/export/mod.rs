//! Export codecs for the decision history.
//!
//! - `FlatCsvCodec` - One row per decision (date, title, score, recommendation, outcome)
//! - `JsonHistoryCodec` / `YamlHistoryCodec` - Full structural snapshot

mod flat_csv;
mod structural;

pub use flat_csv::{FlatCsvCodec, FlatHistoryRow};
pub use structural::{JsonHistoryCodec, YamlHistoryCodec};

use crate::ports::{ExportFormat, HistoryCodec};

/// Codec for a format, using `date_format` for flat exports.
pub fn codec_for(format: ExportFormat, date_format: &str) -> Box<dyn HistoryCodec> {
    match format {
        ExportFormat::Csv => Box::new(FlatCsvCodec::new(date_format)),
        ExportFormat::Json => Box::new(JsonHistoryCodec),
        ExportFormat::Yaml => Box::new(YamlHistoryCodec),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::analysis::{
        ExpectedValueAnalyzer, FinancialCalculator, QuickAssessmentScorer, Recommendation,
    };
    use crate::domain::assessment::{AssessmentMode, DecisionInput};
    use crate::domain::foundation::Score;
    use crate::domain::history::{
        Correctness, DecisionHistory, HistorySnapshot, Outcome, OutcomeAction, OutcomeResult,
    };

    /// Two decisions: an older one with an outcome, a newer pending one.
    pub fn sample_history() -> HistorySnapshot {
        let mut history = DecisionHistory::new();

        let input = DecisionInput {
            decision_what: "Camera".into(),
            purchase_cost: 45_000.0,
            monthly_cost: 500.0,
            yearly_maintenance: 3_000.0,
            resale_value: 20_000.0,
            yearly_uses: 12,
            ..Default::default()
        };
        let metrics = FinancialCalculator::compute(&input);
        let ev = ExpectedValueAnalyzer::compute_declared(30.0, 100_000.0, 70.0, 45_000.0);
        let scored = QuickAssessmentScorer::score(&input, &metrics, &ev);
        let older = history.record(
            AssessmentMode::Quick,
            input,
            scored.breakdown,
            scored.recommendation,
            None,
        );
        history.attach_outcome(
            older,
            Outcome::new(
                OutcomeAction::Purchased,
                OutcomeResult::Regretted,
                Correctness::Yes,
                "Sold it, \"never again\"",
            ),
        );

        let input = DecisionInput {
            decision_what: "Rowing machine".into(),
            purchase_cost: 900.0,
            ..Default::default()
        };
        let metrics = FinancialCalculator::compute(&input);
        let ev = ExpectedValueAnalyzer::compute_declared(0.0, 0.0, 0.0, 0.0);
        let breakdown = QuickAssessmentScorer::score(&input, &metrics, &ev).breakdown;
        history.record(
            AssessmentMode::Quick,
            input,
            breakdown,
            Recommendation::for_score(Score::new(45)),
            None,
        );

        history.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_matches_requested_format() {
        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Yaml] {
            assert_eq!(codec_for(format, "%Y-%m-%d").format(), format);
        }
    }
}
