//! ExportHistoryHandler - Encodes the decision history for download or backup.

use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::codec_for;
use crate::domain::foundation::DomainError;
use crate::ports::{DecisionHistoryRepository, ExportError, ExportFormat, ExportedHistory};

const BASE_FILENAME: &str = "decision-history";

/// Command to export the history.
#[derive(Debug, Clone, Default)]
pub struct ExportHistoryCommand {
    pub format: ExportFormat,
    /// When set, the encoded bytes are also written to this path.
    pub destination: Option<PathBuf>,
}

pub struct ExportHistoryHandler {
    repository: Arc<dyn DecisionHistoryRepository>,
    date_format: String,
}

impl ExportHistoryHandler {
    pub fn new(repository: Arc<dyn DecisionHistoryRepository>, date_format: impl Into<String>) -> Self {
        Self {
            repository,
            date_format: date_format.into(),
        }
    }

    /// # Errors
    ///
    /// - `ExportFailed` when the history is empty, encoding fails or the file can't be written
    pub async fn handle(&self, cmd: ExportHistoryCommand) -> Result<ExportedHistory, DomainError> {
        let snapshot = self.repository.snapshot().await?;
        let codec = codec_for(cmd.format, &self.date_format);
        let content = codec.encode(&snapshot)?;
        let exported = ExportedHistory::new(content, cmd.format, BASE_FILENAME, snapshot.len());

        if let Some(path) = &cmd.destination {
            tokio::fs::write(path, &exported.content)
                .await
                .map_err(ExportError::from)?;
        }

        tracing::info!(
            format = %cmd.format,
            records = exported.record_count,
            bytes = exported.content.len(),
            "History exported"
        );
        Ok(exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FlatCsvCodec, InMemoryHistoryRepository, JsonHistoryCodec};
    use crate::application::handlers::{AssessDecisionCommand, AssessDecisionHandler};
    use crate::domain::foundation::ErrorCode;
    use tempfile::TempDir;

    async fn repo_with(n: usize) -> Arc<InMemoryHistoryRepository> {
        let repo = Arc::new(InMemoryHistoryRepository::new());
        let assess = AssessDecisionHandler::new(repo.clone());
        for _ in 0..n {
            assess.handle(AssessDecisionCommand::default()).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn empty_history_fails_with_export_error() {
        let handler = ExportHistoryHandler::new(repo_with(0).await, "%Y-%m-%d");
        let err = handler
            .handle(ExportHistoryCommand::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportFailed);
    }

    #[tokio::test]
    async fn csv_export_has_one_row_per_decision() {
        let handler = ExportHistoryHandler::new(repo_with(2).await, "%Y-%m-%d");
        let exported = handler.handle(ExportHistoryCommand::default()).await.unwrap();

        assert_eq!(exported.filename, "decision-history.csv");
        let rows = FlatCsvCodec::decode(exported.content.as_slice()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.title == "Unnamed Decision" && r.is_pending()));
    }

    #[tokio::test]
    async fn json_export_is_written_to_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.json");
        let handler = ExportHistoryHandler::new(repo_with(3).await, "%Y-%m-%d");

        handler
            .handle(ExportHistoryCommand {
                format: ExportFormat::Json,
                destination: Some(path.clone()),
            })
            .await
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(JsonHistoryCodec::decode(&bytes).unwrap().len(), 3);
    }
}
