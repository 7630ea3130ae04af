//! Configuration types for the rate plan engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the `engine.yaml` configuration file.

use serde::Deserialize;

/// Metadata identifying the engine deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the engine.
    pub name: String,
    /// Version of the configuration.
    pub version: String,
}

/// Duplicate detection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionSettings {
    /// Longest window, in days, accepted for a duplicate scan or check.
    #[serde(default = "default_max_window_days")]
    pub max_window_days: i64,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            max_window_days: default_max_window_days(),
        }
    }
}

fn default_max_window_days() -> i64 {
    366
}

/// Availability dip settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilitySettings {
    /// Room count assumed when a dip request does not supply one.
    #[serde(default)]
    pub default_expected_count: Option<i64>,
}

/// The complete engine configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Engine metadata.
    pub engine: EngineMetadata,
    /// Duplicate detection settings.
    #[serde(default)]
    pub detection: DetectionSettings,
    /// Availability dip settings.
    #[serde(default)]
    pub availability: AvailabilitySettings,
}
