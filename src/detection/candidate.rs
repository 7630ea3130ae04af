//! Candidate schedule duplicate check.
//!
//! Before a new rate plan is created, its proposed schedule is checked
//! against the existing plans. The candidate is tagged with a reserved plan
//! id, merged into the existing records, and run through exactly the same
//! matrix, signature and grouping steps as the read path. Whatever group the
//! candidate lands in, minus the candidate itself, is the set of conflicts.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CandidateDay, DateWindow, DuplicateCheck, PlanId, RateDay};

use super::grouping::group_duplicates;
use super::matrix::build_plan_matrix;
use super::signature::compose_window_signatures;

/// Plan id given to the candidate schedule during a duplicate check.
///
/// Real plan ids are non-negative, so a negative id can never collide.
pub const CANDIDATE_PLAN_ID: PlanId = -1;

/// Checks whether creating `candidate` would duplicate an existing plan.
///
/// The candidate duplicates a plan only if the two agree on every date of
/// `window`, including which dates have no record at all. A candidate with
/// no record inside the window is never a duplicate, whether it is empty or
/// priced only on other dates.
///
/// # Errors
///
/// Returns [`EngineError::ReservedPlanId`] if any existing record carries a
/// negative plan id, since the candidate id could then collide with it.
///
/// # Examples
///
/// ```
/// use rate_plan_engine::detection::would_duplicate;
/// use rate_plan_engine::models::{CandidateDay, DateWindow, RateDay};
/// use chrono::NaiveDate;
///
/// let existing: Vec<RateDay> = serde_json::from_str(r#"[
///     {"planId": 4, "date": "2025-08-01", "defaultRate": 100, "child": 50}
/// ]"#).unwrap();
/// let candidate: Vec<CandidateDay> = serde_json::from_str(r#"[
///     {"date": "2025-08-01", "defaultRate": "100.00", "child": 50}
/// ]"#).unwrap();
/// let window = DateWindow::single_day(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
///
/// let check = would_duplicate(&existing, &candidate, &window).unwrap();
/// assert!(check.is_duplicate);
/// assert_eq!(check.conflicting_plan_ids, vec![4]);
/// ```
pub fn would_duplicate(
    existing: &[RateDay],
    candidate: &[CandidateDay],
    window: &DateWindow,
) -> EngineResult<DuplicateCheck> {
    if let Some(day) = existing.iter().find(|day| day.plan_id < 0) {
        return Err(EngineError::ReservedPlanId {
            plan_id: day.plan_id,
        });
    }

    let merged: Vec<RateDay> = existing
        .iter()
        .cloned()
        .chain(
            candidate
                .iter()
                .cloned()
                .map(|day| day.into_rate_day(CANDIDATE_PLAN_ID)),
        )
        .collect();

    let signatures = compose_window_signatures(&build_plan_matrix(&merged), window);
    let conflicting_plan_ids: Vec<PlanId> = group_duplicates(&signatures)
        .into_iter()
        .find(|group| group.contains(CANDIDATE_PLAN_ID))
        .map(|group| {
            group
                .iter()
                .filter(|plan_id| *plan_id != CANDIDATE_PLAN_ID)
                .collect()
        })
        .unwrap_or_default();

    debug!(
        window = %window,
        existing_records = existing.len(),
        candidate_records = candidate.len(),
        conflicts = conflicting_plan_ids.len(),
        "Checked candidate schedule for duplicates"
    );

    Ok(DuplicateCheck {
        is_duplicate: !conflicting_plan_ids.is_empty(),
        conflicting_plan_ids,
        window: *window,
    })
}
