//! Configuration loading and management for the Rate Plan Engine.
//!
//! This module loads the engine configuration from a YAML file: engine
//! metadata, the longest window accepted for duplicate detection, and the
//! default room count for availability dip checks.
//!
//! # Example
//!
//! ```no_run
//! use rate_plan_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded engine: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AvailabilitySettings, DetectionSettings, EngineConfig, EngineMetadata};
