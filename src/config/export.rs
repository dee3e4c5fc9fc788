//! Export configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Timestamp;
use crate::ports::ExportFormat;

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub default_format: ExportFormat,

    /// strftime pattern for the flat export's date column
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.date_format.trim().is_empty() {
            return Err(ValidationError::MissingRequired("export.date_format"));
        }
        if !Timestamp::is_valid_format(&self.date_format) {
            return Err(ValidationError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::default(),
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
