//! DecisionHistory aggregate - newest-first list of scored decisions.

use serde::{Deserialize, Serialize};

use super::record::{DecisionRecord, Outcome};
use super::statistics::{HistoryInsights, HistoryStatistics, InsightPolicy};
use crate::domain::analysis::{Alternative, Recommendation, ScoreBreakdown};
use crate::domain::assessment::{AssessmentMode, DecisionInput};
use crate::domain::foundation::DecisionId;

/// Serializable view of the whole history, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub decisions: Vec<DecisionRecord>,
}

impl HistorySnapshot {
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

/// Ordered collection of decision records.
///
/// New records are inserted at the front. When a record cap is set the
/// oldest records are dropped once it is exceeded.
#[derive(Debug, Clone, Default)]
pub struct DecisionHistory {
    records: Vec<DecisionRecord>,
    max_records: Option<usize>,
}

impl DecisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `max_records` entries. Zero means unbounded.
    pub fn with_limit(max_records: usize) -> Self {
        Self::new().limited(max_records)
    }

    /// Applies a record cap, dropping the oldest records beyond it.
    pub fn limited(mut self, max_records: usize) -> Self {
        self.max_records = (max_records > 0).then_some(max_records);
        if let Some(max) = self.max_records {
            self.records.truncate(max);
        }
        self
    }

    /// Rebuilds a history from a snapshot, keeping its order.
    pub fn from_snapshot(snapshot: HistorySnapshot) -> Self {
        Self {
            records: snapshot.decisions,
            max_records: None,
        }
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            decisions: self.records.clone(),
        }
    }

    /// Creates a record for a scored decision, prepends it and returns its id.
    pub fn record(
        &mut self,
        mode: AssessmentMode,
        input: DecisionInput,
        breakdown: ScoreBreakdown,
        recommendation: Recommendation,
        alternatives: Option<Vec<Alternative>>,
    ) -> DecisionId {
        self.push(DecisionRecord::new(
            mode,
            input,
            breakdown,
            recommendation,
            alternatives,
        ))
    }

    /// Prepends an existing record and returns its id.
    pub fn push(&mut self, record: DecisionRecord) -> DecisionId {
        let id = record.id();
        self.records.insert(0, record);
        if let Some(max) = self.max_records {
            self.records.truncate(max);
        }
        id
    }

    /// Returns `false` when no record has this id.
    pub fn attach_outcome(&mut self, id: DecisionId, outcome: Outcome) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.set_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when no record has this id.
    pub fn remove(&mut self, id: DecisionId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn get(&self, id: DecisionId) -> Option<&DecisionRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &DecisionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn compute_statistics(&self) -> HistoryStatistics {
        HistoryStatistics::compute(&self.records)
    }

    pub fn insights(&self, policy: &InsightPolicy) -> HistoryInsights {
        HistoryInsights::derive(&self.compute_statistics(), policy)
    }
}
