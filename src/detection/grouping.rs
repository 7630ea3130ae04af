//! Duplicate grouping.
//!
//! This module buckets plans by identical composite signature. Any bucket
//! with two or more plans is a duplicate group; unique plans are dropped.
//! A plan with no record anywhere in the window has nothing to compare and
//! never joins a group.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{DateWindow, DuplicateGroup, DuplicateReport, PlanId, RateDay};

use super::matrix::build_plan_matrix;
use super::signature::{CompositeSignature, compose_window_signatures};

/// Groups plans that share an identical composite signature.
///
/// Plans absent from the whole window are skipped, since an all-missing
/// signature carries no prices. Only groups with at least two members are
/// returned. Members are sorted
/// ascending and groups are ordered by their smallest member, but callers
/// should compare groups as sets.
///
/// # Examples
///
/// ```
/// use rate_plan_engine::detection::{build_plan_matrix, compose_window_signatures, group_duplicates};
/// use rate_plan_engine::models::{DateWindow, RateDay};
/// use chrono::NaiveDate;
///
/// let days: Vec<RateDay> = serde_json::from_str(r#"[
///     {"planId": 1, "date": "2025-08-01", "defaultRate": 100},
///     {"planId": 2, "date": "2025-08-01", "defaultRate": 100},
///     {"planId": 3, "date": "2025-08-01", "defaultRate": 90}
/// ]"#).unwrap();
/// let window = DateWindow::single_day(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
///
/// let groups = group_duplicates(&compose_window_signatures(&build_plan_matrix(&days), &window));
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].members(), vec![1, 2]);
/// ```
pub fn group_duplicates(signatures: &HashMap<PlanId, CompositeSignature>) -> Vec<DuplicateGroup> {
    let mut buckets: HashMap<&CompositeSignature, Vec<PlanId>> = HashMap::new();
    let mut absent = 0usize;
    for (plan_id, signature) in signatures {
        if signature.is_absent() {
            absent += 1;
            continue;
        }
        buckets.entry(signature).or_default().push(*plan_id);
    }

    let mut groups: Vec<DuplicateGroup> = buckets
        .into_values()
        .filter(|members| members.len() > 1)
        .map(DuplicateGroup::new)
        .collect();
    groups.sort();

    debug!(
        plans = signatures.len(),
        absent,
        groups = groups.len(),
        "Grouped plans by window signature"
    );

    groups
}

/// Scans existing rate days for duplicate plans over a window.
///
/// Runs matrix construction, signature composition and grouping in one
/// call, and also reports which plans lack a record for some window date.
///
/// # Examples
///
/// ```
/// use rate_plan_engine::detection::find_duplicate_plans;
/// use rate_plan_engine::models::{DateWindow, RateDay};
/// use chrono::NaiveDate;
///
/// let days: Vec<RateDay> = serde_json::from_str(r#"[
///     {"planId": 1, "date": "2025-08-01", "defaultRate": 100},
///     {"planId": 1, "date": "2025-08-02", "defaultRate": 100},
///     {"planId": 2, "date": "2025-08-01", "defaultRate": 100}
/// ]"#).unwrap();
/// let window = DateWindow::new(
///     NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
/// )
/// .unwrap();
///
/// let report = find_duplicate_plans(&days, &window);
/// assert!(!report.has_duplicates());
/// assert_eq!(report.plans_considered, 2);
/// assert_eq!(report.incomplete_plans, vec![2]);
/// ```
pub fn find_duplicate_plans(days: &[RateDay], window: &DateWindow) -> DuplicateReport {
    let matrix = build_plan_matrix(days);
    let signatures = compose_window_signatures(&matrix, window);

    let mut incomplete_plans: Vec<PlanId> = signatures
        .iter()
        .filter(|(_, signature)| !signature.is_complete())
        .map(|(plan_id, _)| *plan_id)
        .collect();
    incomplete_plans.sort_unstable();

    let groups = group_duplicates(&signatures);

    DuplicateReport {
        window: *window,
        plans_considered: matrix.len(),
        incomplete_plans,
        groups,
    }
}
