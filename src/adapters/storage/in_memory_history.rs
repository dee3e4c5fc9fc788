//! In-Memory History Repository Adapter
//!
//! Keeps the decision history in process memory. Used by the demo binary
//! and by tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DecisionId, DomainError};
use crate::domain::history::{
    DecisionHistory, DecisionRecord, HistorySnapshot, HistoryStatistics, Outcome,
};
use crate::ports::DecisionHistoryRepository;

/// In-memory decision history.
///
/// All mutations go through one write lock, so concurrent callers keep
/// prepend order and id uniqueness.
#[derive(Debug, Clone)]
pub struct InMemoryHistoryRepository {
    history: Arc<RwLock<DecisionHistory>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::from_history(DecisionHistory::new())
    }

    /// Repository that keeps at most `max_records` decisions.
    pub fn with_limit(max_records: usize) -> Self {
        Self::from_history(DecisionHistory::with_limit(max_records))
    }

    pub fn from_history(history: DecisionHistory) -> Self {
        Self {
            history: Arc::new(RwLock::new(history)),
        }
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionHistoryRepository for InMemoryHistoryRepository {
    async fn save(&self, record: DecisionRecord) -> Result<DecisionId, DomainError> {
        Ok(self.history.write().await.push(record))
    }

    async fn attach_outcome(
        &self,
        id: &DecisionId,
        outcome: Outcome,
    ) -> Result<bool, DomainError> {
        Ok(self.history.write().await.attach_outcome(*id, outcome))
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<DecisionRecord>, DomainError> {
        Ok(self.history.read().await.get(*id).cloned())
    }

    async fn delete(&self, id: &DecisionId) -> Result<bool, DomainError> {
        Ok(self.history.write().await.remove(*id))
    }

    async fn clear(&self) -> Result<usize, DomainError> {
        let mut history = self.history.write().await;
        let removed = history.len();
        history.clear();
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.history.read().await.len())
    }

    async fn statistics(&self) -> Result<HistoryStatistics, DomainError> {
        Ok(self.history.read().await.compute_statistics())
    }

    async fn snapshot(&self) -> Result<HistorySnapshot, DomainError> {
        Ok(self.history.read().await.snapshot())
    }
}
