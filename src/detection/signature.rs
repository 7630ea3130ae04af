//! Window signature composition.
//!
//! For a fixed date window, every plan's per-day fingerprints are folded into
//! one ordered [`CompositeSignature`]. A date the plan has no record for
//! contributes [`DaySlot::Missing`], which never equals a priced day, so a
//! plan with a gap can never match a plan that is priced on that date.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{DateWindow, PlanId};

use super::fingerprint::DayFingerprint;
use super::matrix::PlanMatrix;

/// One position of a composite signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DaySlot {
    /// The plan has no record for this date.
    Missing,
    /// The plan's fingerprint for this date.
    Priced(DayFingerprint),
}

/// A plan's fingerprints over every date of a window, ascending by date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeSignature(Vec<DaySlot>);

impl CompositeSignature {
    /// The slots in ascending date order.
    pub fn slots(&self) -> &[DaySlot] {
        &self.0
    }

    /// Number of window dates the plan has no record for.
    pub fn missing_count(&self) -> usize {
        self.0
            .iter()
            .filter(|slot| matches!(slot, DaySlot::Missing))
            .count()
    }

    /// Returns true if the plan has a record for every window date.
    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    /// Returns true if the plan has no record for any window date.
    pub fn is_absent(&self) -> bool {
        self.0.iter().all(|slot| matches!(slot, DaySlot::Missing))
    }
}

/// Composes one signature per plan in the matrix over `window`.
///
/// Plans whose records all fall outside the window still get a signature,
/// made entirely of [`DaySlot::Missing`]. Such a signature says nothing about
/// the plan's prices and is skipped by grouping.
///
/// # Examples
///
/// ```
/// use rate_plan_engine::detection::{build_plan_matrix, compose_window_signatures};
/// use rate_plan_engine::models::{DateWindow, RateDay};
/// use chrono::NaiveDate;
///
/// let days: Vec<RateDay> = serde_json::from_str(r#"[
///     {"planId": 1, "date": "2025-08-01", "defaultRate": 100},
///     {"planId": 1, "date": "2025-08-02", "defaultRate": 100}
/// ]"#).unwrap();
/// let window = DateWindow::new(
///     NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
/// )
/// .unwrap();
///
/// let signatures = compose_window_signatures(&build_plan_matrix(&days), &window);
/// assert_eq!(signatures[&1].slots().len(), 3);
/// assert_eq!(signatures[&1].missing_count(), 1);
/// ```
pub fn compose_window_signatures(
    matrix: &PlanMatrix,
    window: &DateWindow,
) -> HashMap<PlanId, CompositeSignature> {
    let dates: Vec<NaiveDate> = window.dates().collect();

    matrix
        .plan_ids()
        .map(|plan_id| {
            let slots = dates
                .iter()
                .map(|date| match matrix.get(plan_id, *date) {
                    Some(fingerprint) => DaySlot::Priced(fingerprint.clone()),
                    None => DaySlot::Missing,
                })
                .collect();
            (plan_id, CompositeSignature(slots))
        })
        .collect()
}
