//! Plan matrix construction.
//!
//! This module groups rate days by plan and then by date into a
//! [`PlanMatrix`], the lookup structure the window composer reads from.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{PlanId, RateDay};

use super::fingerprint::{DayFingerprint, encode_day};

/// Per-plan, per-date fingerprints.
///
/// Every plan id seen in the input is a key, even if it has only one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanMatrix {
    plans: HashMap<PlanId, HashMap<NaiveDate, DayFingerprint>>,
}

impl PlanMatrix {
    /// The fingerprint of `plan_id` on `date`, if that plan has a record for it.
    pub fn get(&self, plan_id: PlanId, date: NaiveDate) -> Option<&DayFingerprint> {
        self.plans.get(&plan_id).and_then(|days| days.get(&date))
    }

    /// Checks whether the plan appeared in the input at all.
    pub fn contains_plan(&self, plan_id: PlanId) -> bool {
        self.plans.contains_key(&plan_id)
    }

    /// All plan ids in the matrix, in no particular order.
    pub fn plan_ids(&self) -> impl Iterator<Item = PlanId> + '_ {
        self.plans.keys().copied()
    }

    /// Number of distinct dates recorded for a plan (0 for unknown plans).
    pub fn date_count(&self, plan_id: PlanId) -> usize {
        self.plans.get(&plan_id).map_or(0, HashMap::len)
    }

    /// Number of distinct plans.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Returns true if the matrix holds no plans.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// Builds a plan matrix from an unordered list of rate days.
///
/// When the same `(plan_id, date)` pair occurs more than once, the record
/// that comes later in `days` replaces the earlier one. The number of
/// replaced records is logged at debug level.
///
/// # Examples
///
/// ```
/// use rate_plan_engine::detection::{build_plan_matrix, encode_day};
/// use rate_plan_engine::models::RateDay;
///
/// let days: Vec<RateDay> = serde_json::from_str(r#"[
///     {"planId": 1, "date": "2025-08-01", "defaultRate": 100},
///     {"planId": 1, "date": "2025-08-01", "defaultRate": 120}
/// ]"#).unwrap();
///
/// let matrix = build_plan_matrix(&days);
/// assert_eq!(matrix.len(), 1);
/// assert_eq!(matrix.get(1, days[1].date), Some(&encode_day(&days[1])));
/// ```
pub fn build_plan_matrix(days: &[RateDay]) -> PlanMatrix {
    let mut plans: HashMap<PlanId, HashMap<NaiveDate, DayFingerprint>> = HashMap::new();
    let mut replaced = 0usize;

    for day in days {
        let previous = plans
            .entry(day.plan_id)
            .or_default()
            .insert(day.date, encode_day(day));
        if previous.is_some() {
            replaced += 1;
        }
    }

    if replaced > 0 {
        debug!(
            records = days.len(),
            replaced,
            "Duplicate (plan, date) records resolved by last occurrence"
        );
    }

    PlanMatrix { plans }
}
