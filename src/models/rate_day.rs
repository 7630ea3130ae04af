//! Rate day model and the priceable field set.
//!
//! This module defines [`RateDay`], one room-rate record for one plan on one
//! calendar date, together with [`PriceFields`], the fixed set of priceable
//! attributes that decide whether two days are priced identically.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a rate plan.
///
/// Real plan ids are non-negative; negative ids are reserved for synthetic
/// plans such as the candidate schedule in a duplicate check.
pub type PlanId = i64;

/// Number of positional pax-tier rates carried by every rate day.
pub const PAX_TIERS: usize = 18;

/// The fixed, ordered set of priceable fields of a rate day.
///
/// Every field is optional. An absent field and an explicit `null` both
/// deserialize to `None`, so the two are indistinguishable once parsed.
/// Rates compare by exact decimal value (`100` equals `100.00`).
///
/// A fractional JSON number is read through `f64` before it becomes a
/// [`Decimal`], which keeps currency precision but not beyond ~15
/// significant digits. Send rates as strings when more precision matters.
///
/// # Example
///
/// ```
/// use rate_plan_engine::models::PriceFields;
///
/// let with_null: PriceFields =
///     serde_json::from_str(r#"{"defaultRate": 100, "pax3": null}"#).unwrap();
/// let without: PriceFields = serde_json::from_str(r#"{"defaultRate": "100.00"}"#).unwrap();
/// assert_eq!(with_null, without);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceFields {
    /// The default (base) rate for the day.
    pub default_rate: Option<Decimal>,
    /// The child rate.
    pub child: Option<Decimal>,
    /// Rate for 1 guest.
    pub pax1: Option<Decimal>,
    /// Rate for 2 guests.
    pub pax2: Option<Decimal>,
    /// Rate for 3 guests.
    pub pax3: Option<Decimal>,
    /// Rate for 4 guests.
    pub pax4: Option<Decimal>,
    /// Rate for 5 guests.
    pub pax5: Option<Decimal>,
    /// Rate for 6 guests.
    pub pax6: Option<Decimal>,
    /// Rate for 7 guests.
    pub pax7: Option<Decimal>,
    /// Rate for 8 guests.
    pub pax8: Option<Decimal>,
    /// Rate for 9 guests.
    pub pax9: Option<Decimal>,
    /// Rate for 10 guests.
    pub pax10: Option<Decimal>,
    /// Rate for 11 guests.
    pub pax11: Option<Decimal>,
    /// Rate for 12 guests.
    pub pax12: Option<Decimal>,
    /// Rate for 13 guests.
    pub pax13: Option<Decimal>,
    /// Rate for 14 guests.
    pub pax14: Option<Decimal>,
    /// Rate for 15 guests.
    pub pax15: Option<Decimal>,
    /// Rate for 16 guests.
    pub pax16: Option<Decimal>,
    /// Rate for 17 guests.
    pub pax17: Option<Decimal>,
    /// Rate for 18 guests.
    pub pax18: Option<Decimal>,
    /// Sell mode code.
    pub sell_mode: Option<i64>,
    /// Rate mode code.
    pub rate_mode: Option<i64>,
}

impl PriceFields {
    /// Returns the pax-tier rate for `tier` (1-based), or `None` when the
    /// tier is unset or outside `1..=18`.
    pub fn pax(&self, tier: usize) -> Option<Decimal> {
        match tier {
            1 => self.pax1,
            2 => self.pax2,
            3 => self.pax3,
            4 => self.pax4,
            5 => self.pax5,
            6 => self.pax6,
            7 => self.pax7,
            8 => self.pax8,
            9 => self.pax9,
            10 => self.pax10,
            11 => self.pax11,
            12 => self.pax12,
            13 => self.pax13,
            14 => self.pax14,
            15 => self.pax15,
            16 => self.pax16,
            17 => self.pax17,
            18 => self.pax18,
            _ => None,
        }
    }

    /// Returns true if no priceable field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One room-rate record for one plan on one calendar date.
///
/// The priceable fields are flattened into the record, so the JSON shape is
/// the one returned by the rate plan backend:
///
/// ```
/// use rate_plan_engine::models::RateDay;
/// use rust_decimal::Decimal;
///
/// let day: RateDay = serde_json::from_str(
///     r#"{"planId": 7, "date": "2025-08-01", "defaultRate": 100, "child": 50, "roomTypeId": 3}"#,
/// )
/// .unwrap();
/// assert_eq!(day.plan_id, 7);
/// assert_eq!(day.prices.default_rate, Some(Decimal::new(100, 0)));
/// assert_eq!(day.prices.pax1, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDay {
    /// The owning rate plan.
    pub plan_id: PlanId,
    /// The calendar date this record prices.
    pub date: NaiveDate,
    /// The priceable attributes for this day.
    #[serde(flatten)]
    pub prices: PriceFields,
}

/// One day of a proposed schedule that has not been created yet.
///
/// Carries the same priceable fields as [`RateDay`] but no plan id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDay {
    /// The calendar date this day prices.
    pub date: NaiveDate,
    /// The priceable attributes for this day.
    #[serde(flatten)]
    pub prices: PriceFields,
}

impl CandidateDay {
    /// Tags this candidate day with a plan id, producing a [`RateDay`].
    pub fn into_rate_day(self, plan_id: PlanId) -> RateDay {
        RateDay {
            plan_id,
            date: self.date,
            prices: self.prices,
        }
    }
}
