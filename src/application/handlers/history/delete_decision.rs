//! DeleteDecisionHandler and ClearHistoryHandler - History removal commands.

use std::sync::Arc;

use crate::domain::foundation::{DecisionId, DomainError};
use crate::ports::DecisionHistoryRepository;

/// Command to delete one recorded decision.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub decision_id: DecisionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteDecisionResult {
    pub found: bool,
}

pub struct DeleteDecisionHandler {
    repository: Arc<dyn DecisionHistoryRepository>,
}

impl DeleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionHistoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteDecisionCommand,
    ) -> Result<DeleteDecisionResult, DomainError> {
        let found = self.repository.delete(&cmd.decision_id).await?;
        if found {
            tracing::info!(decision_id = %cmd.decision_id, "Decision deleted");
        } else {
            tracing::warn!(decision_id = %cmd.decision_id, "Delete of unknown decision ignored");
        }
        Ok(DeleteDecisionResult { found })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearHistoryResult {
    pub removed: usize,
}

/// Handler that empties the whole history.
pub struct ClearHistoryHandler {
    repository: Arc<dyn DecisionHistoryRepository>,
}

impl ClearHistoryHandler {
    pub fn new(repository: Arc<dyn DecisionHistoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<ClearHistoryResult, DomainError> {
        let removed = self.repository.clear().await?;
        tracing::info!(removed, "Decision history cleared");
        Ok(ClearHistoryResult { removed })
    }
}
