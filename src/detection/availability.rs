//! Availability dip detection.
//!
//! Flags dates on which a room type had fewer rooms available than the
//! caller expected, for manual review.

use crate::error::{EngineError, EngineResult};
use crate::models::{AvailabilityDip, AvailabilitySample};

/// Returns every sample whose count is strictly below `expected`.
///
/// Output keeps the input order. A count equal to `expected` is not a dip.
///
/// # Errors
///
/// Returns [`EngineError::NegativeExpectedCount`] if `expected` is negative,
/// or [`EngineError::NegativeAvailability`] for the first sample with a
/// negative count.
///
/// # Examples
///
/// ```
/// use rate_plan_engine::detection::find_dips;
/// use rate_plan_engine::models::AvailabilitySample;
/// use chrono::NaiveDate;
///
/// let series = vec![
///     AvailabilitySample { date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), count: 5 },
///     AvailabilitySample { date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), count: 4 },
/// ];
///
/// let dips = find_dips(5, &series).unwrap();
/// assert_eq!(dips.len(), 1);
/// assert_eq!(dips[0].available, 4);
/// assert_eq!(dips[0].expected, 5);
/// ```
pub fn find_dips(expected: i64, series: &[AvailabilitySample]) -> EngineResult<Vec<AvailabilityDip>> {
    if expected < 0 {
        return Err(EngineError::NegativeExpectedCount { expected });
    }
    if let Some(sample) = series.iter().find(|sample| sample.count < 0) {
        return Err(EngineError::NegativeAvailability {
            date: sample.date,
            count: sample.count,
        });
    }

    Ok(series
        .iter()
        .filter(|sample| sample.count < expected)
        .map(|sample| AvailabilityDip {
            date: sample.date,
            available: sample.count,
            expected,
        })
        .collect())
}
