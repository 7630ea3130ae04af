//! Duplicate detection result models.
//!
//! This module contains the derived values returned by the duplicate
//! detector: [`DuplicateGroup`], the read-path [`DuplicateReport`], and the
//! write-guard [`DuplicateCheck`] verdict. None of them is ever persisted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{DateWindow, PlanId};

/// Two or more plans that are pricing-identical over a window.
///
/// Members are held in ascending order for stable display; callers should
/// still treat a group as a set.
///
/// # Example
///
/// ```
/// use rate_plan_engine::models::DuplicateGroup;
///
/// let group = DuplicateGroup::new([2, 1]);
/// assert_eq!(group.members(), vec![1, 2]);
/// assert!(group.contains(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DuplicateGroup {
    plan_ids: BTreeSet<PlanId>,
}

impl DuplicateGroup {
    /// Creates a group from any collection of plan ids.
    pub fn new(plan_ids: impl IntoIterator<Item = PlanId>) -> Self {
        Self {
            plan_ids: plan_ids.into_iter().collect(),
        }
    }

    /// Checks whether the plan belongs to this group.
    pub fn contains(&self, plan_id: PlanId) -> bool {
        self.plan_ids.contains(&plan_id)
    }

    /// The member plan ids in ascending order.
    pub fn members(&self) -> Vec<PlanId> {
        self.plan_ids.iter().copied().collect()
    }

    /// The number of plans in the group.
    pub fn len(&self) -> usize {
        self.plan_ids.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.plan_ids.is_empty()
    }

    /// Iterates the member plan ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PlanId> + '_ {
        self.plan_ids.iter().copied()
    }
}

/// Result of scanning existing plans for duplicates over a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateReport {
    /// The window the plans were compared over.
    pub window: DateWindow,
    /// Number of distinct plans present in the input.
    pub plans_considered: usize,
    /// Plans with no record for at least one date of the window.
    pub incomplete_plans: Vec<PlanId>,
    /// Groups of pricing-identical plans.
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    /// Returns true if at least one duplicate group was found.
    pub fn has_duplicates(&self) -> bool {
        !self.groups.is_empty()
    }
}

/// Verdict on whether a candidate schedule duplicates an existing plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheck {
    /// True if at least one existing plan matches the candidate on every date.
    pub is_duplicate: bool,
    /// The matching existing plans, ascending.
    pub conflicting_plan_ids: Vec<PlanId>,
    /// The window the candidate was compared over.
    pub window: DateWindow,
}
