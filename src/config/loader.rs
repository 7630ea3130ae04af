//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::DateWindow;

use super::types::{EngineConfig, EngineMetadata};

/// Loads, validates and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// └── engine.yaml   # Engine metadata, detection and availability settings
/// ```
///
/// # Example
///
/// ```no_run
/// use rate_plan_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded engine: {}", loader.engine().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from `engine.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing
    /// - The file contains invalid YAML or lacks a required field
    /// - A setting is outside its allowed range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rate_plan_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), rate_plan_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let engine_path = path.as_ref().join("engine.yaml");
        let path_str = engine_path.display().to_string();

        let content = fs::read_to_string(&engine_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Builds configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use rate_plan_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str(
    ///     "engine:\n  name: Test\n  version: \"1.0\"\ndetection:\n  max_window_days: 31\n",
    /// )?;
    /// assert_eq!(loader.max_window_days(), 31);
    /// # Ok::<(), rate_plan_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.detection.max_window_days < 1 {
            return Err(EngineError::InvalidConfig {
                field: "detection.max_window_days".to_string(),
                message: format!("must be at least 1, got {}", config.detection.max_window_days),
            });
        }

        if let Some(expected) = config.availability.default_expected_count {
            if expected < 0 {
                return Err(EngineError::InvalidConfig {
                    field: "availability.default_expected_count".to_string(),
                    message: format!("must not be negative, got {}", expected),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.config.engine
    }

    /// Longest window, in days, accepted for duplicate detection.
    pub fn max_window_days(&self) -> i64 {
        self.config.detection.max_window_days
    }

    /// Room count used when a dip request omits one.
    pub fn default_expected_count(&self) -> Option<i64> {
        self.config.availability.default_expected_count
    }

    /// Rejects windows longer than the configured maximum.
    ///
    /// Returns [`EngineError::WindowTooLong`] when the window exceeds
    /// `detection.max_window_days`.
    pub fn check_window(&self, window: &DateWindow) -> EngineResult<()> {
        let days = window.len_days();
        let max_days = self.max_window_days();
        if days > max_days {
            return Err(EngineError::WindowTooLong { days, max_days });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn window_of(days: i64) -> DateWindow {
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        DateWindow::new(from, from + chrono::Duration::days(days - 1)).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.engine().name, "Rate Plan Consistency Engine");
        assert_eq!(loader.max_window_days(), 366);
        assert_eq!(loader.default_expected_count(), None);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_sections_default_when_absent() {
        let loader = ConfigLoader::from_yaml_str("engine:\n  name: Minimal\n  version: \"0.1\"\n")
            .unwrap();

        assert_eq!(loader.max_window_days(), 366);
        assert_eq!(loader.default_expected_count(), None);
    }

    #[test]
    fn test_default_expected_count_loaded() {
        let yaml = "engine:\n  name: T\n  version: \"1\"\navailability:\n  default_expected_count: 12\n";
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.default_expected_count(), Some(12));
    }

    #[test]
    fn test_missing_engine_section_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("detection:\n  max_window_days: 10\n");
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "<inline>"),
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_zero_max_window_rejected() {
        let yaml = "engine:\n  name: T\n  version: \"1\"\ndetection:\n  max_window_days: 0\n";
        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "detection.max_window_days");
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_negative_default_expected_rejected() {
        let yaml = "engine:\n  name: T\n  version: \"1\"\navailability:\n  default_expected_count: -3\n";
        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "availability.default_expected_count");
                assert!(message.contains("-3"));
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_check_window_enforces_limit() {
        let yaml = "engine:\n  name: T\n  version: \"1\"\ndetection:\n  max_window_days: 31\n";
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();

        assert!(loader.check_window(&window_of(31)).is_ok());
        match loader.check_window(&window_of(32)) {
            Err(EngineError::WindowTooLong { days, max_days }) => {
                assert_eq!(days, 32);
                assert_eq!(max_days, 31);
            }
            _ => panic!("Expected WindowTooLong error"),
        }
    }
}
