//! Core data models for the Rate Plan Engine.
//!
//! This module contains the input records consumed by the engine and the
//! derived values it returns. All of them are plain immutable data.

mod availability;
mod duplicate;
mod rate_day;
mod window;

pub use availability::{AvailabilityDip, AvailabilitySample};
pub use duplicate::{DuplicateCheck, DuplicateGroup, DuplicateReport};
pub use rate_day::{CandidateDay, PAX_TIERS, PlanId, PriceFields, RateDay};
pub use window::DateWindow;
