//! Day fingerprinting.
//!
//! This module reduces a single rate day to a [`DayFingerprint`], a value
//! that compares equal for two days exactly when every priceable field is
//! equal. Plan id, date and any unlisted attribute never participate.

use crate::models::{PriceFields, RateDay};

/// Canonical fingerprint of one day's priceable attributes.
///
/// Equality and hashing are structural over the fixed field list of
/// [`PriceFields`]; an unset field equals only another unset field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DayFingerprint(PriceFields);

impl DayFingerprint {
    /// The priceable fields this fingerprint was built from.
    pub fn prices(&self) -> &PriceFields {
        &self.0
    }
}

impl From<PriceFields> for DayFingerprint {
    fn from(prices: PriceFields) -> Self {
        Self(prices)
    }
}

/// Encodes one rate day into its fingerprint.
///
/// # Examples
///
/// ```
/// use rate_plan_engine::detection::encode_day;
/// use rate_plan_engine::models::RateDay;
///
/// let a: RateDay =
///     serde_json::from_str(r#"{"planId": 1, "date": "2025-08-01", "defaultRate": 100}"#).unwrap();
/// let b: RateDay = serde_json::from_str(
///     r#"{"planId": 2, "date": "2025-09-15", "defaultRate": 100, "pax3": null}"#,
/// )
/// .unwrap();
///
/// assert_eq!(encode_day(&a), encode_day(&b));
/// ```
pub fn encode_day(day: &RateDay) -> DayFingerprint {
    encode_prices(&day.prices)
}

/// Encodes a bare set of priceable fields into a fingerprint.
pub fn encode_prices(prices: &PriceFields) -> DayFingerprint {
    DayFingerprint(prices.clone())
}
