//! File-based History Repository Adapter
//!
//! Persists the decision history as a single YAML document so it survives
//! restarts. The whole snapshot is rewritten after every mutation, and a
//! mutation only takes effect in memory once the write succeeded.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};
use crate::domain::history::{
    DecisionHistory, DecisionRecord, HistorySnapshot, HistoryStatistics, Outcome,
};
use crate::ports::DecisionHistoryRepository;

/// File-backed decision history.
#[derive(Debug)]
pub struct FileHistoryRepository {
    path: PathBuf,
    history: RwLock<DecisionHistory>,
}

impl FileHistoryRepository {
    /// Opens the history file, starting empty when it does not exist yet.
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileHistoryRepository::open("./data/history.yaml").await?;
    /// ```
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let history = if fs::try_exists(&path).await.map_err(storage_error)? {
            let yaml = fs::read_to_string(&path).await.map_err(storage_error)?;
            let snapshot: HistorySnapshot = serde_yaml::from_str(&yaml).map_err(|e| {
                DomainError::new(ErrorCode::StorageError, "History file is not valid YAML")
                    .with_detail("path", path.display().to_string())
                    .with_detail("reason", e.to_string())
            })?;
            DecisionHistory::from_snapshot(snapshot)
        } else {
            DecisionHistory::new()
        };

        tracing::debug!(path = %path.display(), records = history.len(), "Opened history file");
        Ok(Self {
            path,
            history: RwLock::new(history),
        })
    }

    /// Caps the history at `max_records`, dropping the oldest beyond it.
    pub fn with_limit(mut self, max_records: usize) -> Self {
        let history = std::mem::take(self.history.get_mut());
        *self.history.get_mut() = history.limited(max_records);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, history: &DecisionHistory) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await.map_err(storage_error)?;
        }
        let yaml = serde_yaml::to_string(&history.snapshot()).map_err(|e| {
            DomainError::new(ErrorCode::StorageError, format!("Failed to encode history: {e}"))
        })?;
        fs::write(&self.path, yaml).await.map_err(storage_error)
    }
}

fn storage_error(err: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::StorageError, err.to_string())
}

#[async_trait]
impl DecisionHistoryRepository for FileHistoryRepository {
    async fn save(&self, record: DecisionRecord) -> Result<DecisionId, DomainError> {
        let mut history = self.history.write().await;
        let mut staged = history.clone();
        let id = staged.push(record);
        self.persist(&staged).await?;
        *history = staged;
        Ok(id)
    }

    async fn attach_outcome(
        &self,
        id: &DecisionId,
        outcome: Outcome,
    ) -> Result<bool, DomainError> {
        let mut history = self.history.write().await;
        let mut staged = history.clone();
        if !staged.attach_outcome(*id, outcome) {
            return Ok(false);
        }
        self.persist(&staged).await?;
        *history = staged;
        Ok(true)
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<DecisionRecord>, DomainError> {
        Ok(self.history.read().await.get(*id).cloned())
    }

    async fn delete(&self, id: &DecisionId) -> Result<bool, DomainError> {
        let mut history = self.history.write().await;
        let mut staged = history.clone();
        if !staged.remove(*id) {
            return Ok(false);
        }
        self.persist(&staged).await?;
        *history = staged;
        Ok(true)
    }

    async fn clear(&self) -> Result<usize, DomainError> {
        let mut history = self.history.write().await;
        let mut staged = history.clone();
        let removed = staged.len();
        staged.clear();
        self.persist(&staged).await?;
        *history = staged;
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
