//! Error types for the Rate Plan Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Every variant describes a caller-contract violation or a configuration
//! problem; tolerated data gaps (null rates, missing dates) are never errors.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Rate Plan Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use rate_plan_engine::error::EngineError;
///
/// let error = EngineError::NegativeExpectedCount { expected: -1 };
/// assert_eq!(error.to_string(), "Expected room count must not be negative, got -1");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date window whose start is after its end.
    #[error("Invalid window: from {from} is after to {to}")]
    InvalidWindow {
        /// The requested start of the window.
        from: NaiveDate,
        /// The requested end of the window.
        to: NaiveDate,
    },

    /// A date window longer than the configured maximum.
    #[error("Window of {days} days exceeds the maximum of {max_days} days")]
    WindowTooLong {
        /// The number of days in the requested window.
        days: i64,
        /// The configured maximum number of days.
        max_days: i64,
    },

    /// The expected room count passed to the dip detector was negative.
    #[error("Expected room count must not be negative, got {expected}")]
    NegativeExpectedCount {
        /// The offending expected count.
        expected: i64,
    },

    /// An availability sample carried a negative room count.
    #[error("Availability on {date} must not be negative, got {count}")]
    NegativeAvailability {
        /// The date of the offending sample.
        date: NaiveDate,
        /// The offending count.
        count: i64,
    },

    /// An existing rate record uses a plan id from the reserved candidate domain.
    #[error("Plan id {plan_id} is reserved for candidate schedules; real plan ids must be non-negative")]
    ReservedPlanId {
        /// The offending plan id.
        plan_id: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
