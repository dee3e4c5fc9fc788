//! Decision history repository port.
//!
//! Defines the contract for storing scored decisions and their outcomes.
//!
//! # Design
//!
//! - **Newest first**: `save` prepends, listings come back in that order
//! - **Permissive lookups**: unknown ids report `false`/`None`, not errors
//! - **Serialized writes**: implementations apply one mutation at a time

use crate::domain::foundation::{DecisionId, DomainError};
use crate::domain::history::{DecisionRecord, HistorySnapshot, HistoryStatistics, Outcome};
use async_trait::async_trait;

/// Repository port for the decision history.
#[async_trait]
pub trait DecisionHistoryRepository: Send + Sync {
    /// Prepend a new record and return its id.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, record: DecisionRecord) -> Result<DecisionId, DomainError>;

    /// Attach or replace the outcome of a record.
    ///
    /// Returns `false` if no record has this id.
    async fn attach_outcome(&self, id: &DecisionId, outcome: Outcome)
        -> Result<bool, DomainError>;

    /// Find a record by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<DecisionRecord>, DomainError>;

    /// Delete a record. Returns `false` if no record has this id.
    async fn delete(&self, id: &DecisionId) -> Result<bool, DomainError>;

    /// Delete every record and return how many were removed.
    async fn clear(&self) -> Result<usize, DomainError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, DomainError>;

    /// Accuracy and score statistics over all records.
    async fn statistics(&self) -> Result<HistoryStatistics, DomainError>;

    /// Copy of all records, newest first.
    async fn snapshot(&self) -> Result<HistorySnapshot, DomainError>;
}
