//! Availability models.
//!
//! This module contains the [`AvailabilitySample`] input type and the
//! [`AvailabilityDip`] finding produced by the dip detector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of rooms available for one room type on one date.
///
/// # Example
///
/// ```
/// use rate_plan_engine::models::AvailabilitySample;
///
/// let sample: AvailabilitySample =
///     serde_json::from_str(r#"{"date": "2025-01-01", "count": 4}"#).unwrap();
/// assert_eq!(sample.count, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySample {
    /// The date of the sample.
    pub date: NaiveDate,
    /// Rooms available on `date`. Must not be negative.
    pub count: i64,
}

/// A date on which fewer rooms were available than expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityDip {
    /// The date of the dip.
    pub date: NaiveDate,
    /// The rooms actually available.
    pub available: i64,
    /// The room count the caller expected.
    pub expected: i64,
}

impl AvailabilityDip {
    /// How many rooms short of the expected count this date is.
    pub fn shortfall(&self) -> i64 {
        self.expected - self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortfall() {
        let dip = AvailabilityDip {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            available: 3,
            expected: 5,
        };
        assert_eq!(dip.shortfall(), 2);
    }

    #[test]
    fn test_dip_serialization() {
        let dip = AvailabilityDip {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            available: 4,
            expected: 5,
        };
        let json = serde_json::to_value(dip).unwrap();
        assert_eq!(json["date"], "2025-01-01");
        assert_eq!(json["available"], 4);
        assert_eq!(json["expected"], 5);
    }

    #[test]
    fn test_sample_requires_count() {
        let result = serde_json::from_str::<AvailabilitySample>(r#"{"date": "2025-01-01"}"#);
        assert!(result.is_err());
    }
}
