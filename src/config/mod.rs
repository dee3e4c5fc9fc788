//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PURCHASE_COMPASS` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working config.
//!
//! # Example
//!
//! ```no_run
//! use purchase_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Insights after {} outcomes", config.history.insight_min_outcomes);
//! ```

mod analysis;
mod error;
mod export;
mod history;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use history::HistoryConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// History insights, record cap and storage location
    #[serde(default)]
    pub history: HistoryConfig,

    /// Advisory analysis thresholds
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PURCHASE_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PURCHASE_COMPASS__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `PURCHASE_COMPASS__HISTORY__MAX_RECORDS=50` -> `history.max_records = 50`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PURCHASE_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.history.validate()?;
        self.analysis.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PURCHASE_COMPASS__LOGGING__LEVEL",
        "PURCHASE_COMPASS__LOGGING__JSON",
        "PURCHASE_COMPASS__HISTORY__INSIGHT_MIN_OUTCOMES",
        "PURCHASE_COMPASS__HISTORY__MAX_RECORDS",
        "PURCHASE_COMPASS__ANALYSIS__COST_PER_USE_GOOD_BELOW",
        "PURCHASE_COMPASS__EXPORT__DEFAULT_FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_no_variables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.history.insight_min_outcomes, 3);
        assert_eq!(config.export.default_format, ExportFormat::Csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PURCHASE_COMPASS__LOGGING__LEVEL", "warn");
        env::set_var("PURCHASE_COMPASS__LOGGING__JSON", "true");
        env::set_var("PURCHASE_COMPASS__HISTORY__INSIGHT_MIN_OUTCOMES", "5");
        env::set_var("PURCHASE_COMPASS__HISTORY__MAX_RECORDS", "100");
        env::set_var("PURCHASE_COMPASS__EXPORT__DEFAULT_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json);
        assert_eq!(config.history.insight_min_outcomes, 5);
        assert_eq!(config.history.max_records, Some(100));
        assert_eq!(config.export.default_format, ExportFormat::Json);
    }

    #[test]
    fn test_validate_catches_bad_thresholds() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PURCHASE_COMPASS__ANALYSIS__COST_PER_USE_GOOD_BELOW", "5000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidCostPerUseThresholds)
        );
    }
}
