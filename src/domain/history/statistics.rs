//! Outcome analytics over the decision history.

use serde::{Deserialize, Serialize};

use super::record::{Correctness, DecisionRecord};

/// Default number of outcome-bearing records before patterns are shown.
pub const DEFAULT_MIN_OUTCOMES: usize = 3;

/// Default accuracy (percent) regarded as a good track record.
pub const DEFAULT_ACCURACY_TARGET: f64 = 70.0;

const ADVICE_ON_TARGET: &str = "You're making rational decisions! Trust the system.";
const ADVICE_BELOW_TARGET: &str = "Consider taking more time before deciding.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryStatistics {
    pub total: usize,
    pub with_outcomes: usize,
    /// Share of outcomes marked correct. `None` when no outcomes exist.
    pub accuracy: Option<f64>,
    /// `None` for an empty history.
    pub average_score: Option<f64>,
    /// Accuracy restricted to GO-family recommendations with outcomes.
    pub go_accuracy: Option<f64>,
}

impl HistoryStatistics {
    pub fn compute(records: &[DecisionRecord]) -> Self {
        let total = records.len();

        let mut with_outcomes = 0usize;
        let mut correct = 0usize;
        let mut go_with_outcomes = 0usize;
        let mut go_correct = 0usize;

        for record in records {
            let Some(outcome) = record.outcome() else {
                continue;
            };
            let is_correct = outcome.was_correct == Correctness::Yes;
            with_outcomes += 1;
            correct += usize::from(is_correct);
            if record.recommendation().is_go() {
                go_with_outcomes += 1;
                go_correct += usize::from(is_correct);
            }
        }

        let score_sum: u32 = records.iter().map(|r| u32::from(r.score().value())).sum();

        Self {
            total,
            with_outcomes,
            accuracy: percent(correct, with_outcomes),
            average_score: (total > 0).then(|| f64::from(score_sum) / total as f64),
            go_accuracy: percent(go_correct, go_with_outcomes),
        }
    }
}

fn percent(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

/// Thresholds that govern when history patterns are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightPolicy {
    pub min_outcomes: usize,
    pub accuracy_target: f64,
}

impl Default for InsightPolicy {
    fn default() -> Self {
        Self {
            min_outcomes: DEFAULT_MIN_OUTCOMES,
            accuracy_target: DEFAULT_ACCURACY_TARGET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryInsights {
    Empty,
    NeedMoreOutcomes {
        recorded: usize,
        required: usize,
    },
    Patterns {
        accuracy: f64,
        go_accuracy: Option<f64>,
        average_score: f64,
        meets_target: bool,
        advice: String,
    },
}

impl HistoryInsights {
    pub fn derive(stats: &HistoryStatistics, policy: &InsightPolicy) -> Self {
        if stats.total == 0 {
            return HistoryInsights::Empty;
        }
        let accuracy = match stats.accuracy {
            Some(accuracy) if stats.with_outcomes >= policy.min_outcomes => accuracy,
            _ => {
                return HistoryInsights::NeedMoreOutcomes {
                    recorded: stats.with_outcomes,
                    required: policy.min_outcomes,
                }
            }
        };

        let meets_target = accuracy >= policy.accuracy_target;
        HistoryInsights::Patterns {
            accuracy,
            go_accuracy: stats.go_accuracy,
            average_score: stats.average_score.unwrap_or(0.0),
            meets_target,
            advice: if meets_target {
                ADVICE_ON_TARGET
            } else {
                ADVICE_BELOW_TARGET
            }
            .to_string(),
        }
    }

    /// Human-readable lines for display.
    pub fn messages(&self) -> Vec<String> {
        match self {
            HistoryInsights::Empty => Vec::new(),
            HistoryInsights::NeedMoreOutcomes { required, .. } => vec![format!(
                "Record outcomes for at least {required} decisions to see patterns and improve your decision-making!"
            )],
            HistoryInsights::Patterns {
                accuracy,
                go_accuracy,
                average_score,
                meets_target,
                advice,
            } => {
                let mut lines = vec![format!(
                    "Overall Accuracy: {:.0}% - {}",
                    accuracy,
                    if *meets_target {
                        "Excellent!"
                    } else {
                        "Room for improvement"
                    }
                )];
                if let Some(go) = go_accuracy {
                    lines.push(format!("GO decisions accuracy: {go:.0}%"));
                }
                lines.push(format!("Average decision score: {average_score:.0}/100"));
                lines.push(advice.clone());
                lines
            }
        }
    }
}
