//! History Codec Port - Export format interface.
//!
//! A codec turns a history snapshot into bytes in one transfer format.
//! Encoding is synchronous; callers hold a snapshot, not the live store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::history::HistorySnapshot;

/// Port for encoding the decision history.
///
/// # Contract
///
/// Implementations must:
/// - Emit records in snapshot order (newest first)
/// - Refuse an empty snapshot with `ExportError::Empty`
pub trait HistoryCodec: Send + Sync {
    /// Format produced by this codec.
    fn format(&self) -> ExportFormat;

    /// Encode the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the snapshot is empty or encoding fails.
    fn encode(&self, snapshot: &HistorySnapshot) -> Result<Vec<u8>, ExportError>;
}

/// Export formats supported by the codecs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Flat table, one row per decision.
    #[default]
    Csv,
    /// Full structure as JSON.
    Json,
    /// Full structure as YAML.
    Yaml,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
            ExportFormat::Yaml => "application/yaml",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Encoded history with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedHistory {
    pub content: Vec<u8>,
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    pub format: ExportFormat,
    pub record_count: usize,
}

impl ExportedHistory {
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str, record_count: usize) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
            record_count,
        }
    }
}

/// Errors that can occur during history export or import.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("No decisions to export")]
    Empty,

    #[error("Invalid date format '{0}'")]
    DateFormat(String),

    #[error("CSV encoding failed: {0}")]
    Csv(String),

    #[error("JSON encoding failed: {0}")]
    Json(String),

    #[error("YAML encoding failed: {0}")]
    Yaml(String),

    #[error("I/O error during export: {0}")]
    Io(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ExportError {
    fn from(err: serde_yaml::Error) -> Self {
        ExportError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        DomainError::new(ErrorCode::ExportFailed, err.to_string())
    }
}
