//! Detection logic for the Rate Plan Engine.
//!
//! This module contains the duplicate detection pipeline (day fingerprints,
//! the plan matrix, window signatures and grouping), the candidate schedule
//! check built on top of it, and the availability dip detector.
//!
//! Every function here is pure and synchronous: inputs are borrowed, never
//! mutated, and results are freshly allocated values.

mod availability;
mod candidate;
mod fingerprint;
mod grouping;
mod matrix;
mod signature;

pub use availability::find_dips;
pub use candidate::{CANDIDATE_PLAN_ID, would_duplicate};
pub use fingerprint::{DayFingerprint, encode_day, encode_prices};
pub use grouping::{find_duplicate_plans, group_duplicates};
pub use matrix::{PlanMatrix, build_plan_matrix};
pub use signature::{CompositeSignature, DaySlot, compose_window_signatures};
