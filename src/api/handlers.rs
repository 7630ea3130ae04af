//! HTTP request handlers for the Rate Plan Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::detection::{find_dips, find_duplicate_plans, would_duplicate};

use super::request::{DipRequest, DuplicateCheckRequest, DuplicateScanRequest};
use super::response::{ApiError, ApiErrorResponse, DipResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rate-plans/duplicates", post(duplicate_scan_handler))
        .route("/rate-plans/duplicates/check", post(duplicate_check_handler))
        .route("/availability/dips", post(availability_dips_handler))
        .with_state(state)
}

/// Handler for POST /rate-plans/duplicates.
///
/// Groups the supplied plans into duplicate groups over the window.
async fn duplicate_scan_handler(
    State(state): State<AppState>,
    payload: Result<Json<DuplicateScanRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing duplicate scan request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = state.config().check_window(&request.window) {
        warn!(correlation_id = %correlation_id, error = %err, "Window rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    let report = find_duplicate_plans(&request.days, &request.window);
    info!(
        correlation_id = %correlation_id,
        window = %request.window,
        records = request.days.len(),
        plans = report.plans_considered,
        groups = report.groups.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Duplicate scan completed"
    );

    ok_json(report)
}

/// Handler for POST /rate-plans/duplicates/check.
///
/// Decides whether the candidate schedule would duplicate an existing plan.
async fn duplicate_check_handler(
    State(state): State<AppState>,
    payload: Result<Json<DuplicateCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing duplicate check request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = state.config().check_window(&request.window) {
        warn!(correlation_id = %correlation_id, error = %err, "Window rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    match would_duplicate(&request.existing_days, &request.candidate_days, &request.window) {
        Ok(check) => {
            info!(
                correlation_id = %correlation_id,
                window = %request.window,
                is_duplicate = check.is_duplicate,
                conflicts = ?check.conflicting_plan_ids,
                duration_us = start_time.elapsed().as_micros(),
                "Duplicate check completed"
            );
            ok_json(check)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Duplicate check failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /availability/dips.
///
/// Reports dates whose availability is below the expected room count.
async fn availability_dips_handler(
    State(state): State<AppState>,
    payload: Result<Json<DipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing availability dip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let Some(expected) = request
        .expected
        .or_else(|| state.config().default_expected_count())
    else {
        warn!(correlation_id = %correlation_id, "No expected count supplied or configured");
        return ApiErrorResponse::bad_request(ApiError::validation_error(
            "missing field: expected (no default_expected_count configured)",
        ))
        .into_response();
    };

    match find_dips(expected, &request.series) {
        Ok(dips) => {
            info!(
                correlation_id = %correlation_id,
                samples = request.series.len(),
                expected,
                dips = dips.len(),
                "Availability dip scan completed"
            );
            ok_json(DipResponse { expected, dips })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Availability dip scan failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn ok_json<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("Invalid window") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
