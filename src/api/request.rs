//! Request types for the Rate Plan Engine API.
//!
//! This module defines the JSON request bodies for the duplicate scan,
//! candidate check and availability dip endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{AvailabilitySample, CandidateDay, DateWindow, RateDay};

/// Request body for `POST /rate-plans/duplicates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateScanRequest {
    /// The window to compare plans over.
    pub window: DateWindow,
    /// Existing rate days, possibly spanning many plans.
    pub days: Vec<RateDay>,
}

/// Request body for `POST /rate-plans/duplicates/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckRequest {
    /// The window to compare the candidate over.
    pub window: DateWindow,
    /// Existing rate days of persisted plans.
    #[serde(default)]
    pub existing_days: Vec<RateDay>,
    /// The proposed schedule.
    pub candidate_days: Vec<CandidateDay>,
}

/// Request body for `POST /availability/dips`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DipRequest {
    /// Expected room count; falls back to the configured default when absent.
    #[serde(default)]
    pub expected: Option<i64>,
    /// Availability samples to scan, in caller order.
    pub series: Vec<AvailabilitySample>,
}
