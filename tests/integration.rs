//! Integration tests for the Rate Plan Engine.
//!
//! This test suite covers:
//! - Duplicate scans over complete and incomplete plans
//! - Candidate schedule checks before plan creation
//! - Availability dip detection
//! - HTTP endpoints and error responses
//! - Order independence and idempotence properties

use std::collections::HashSet;
use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use rate_plan_engine::api::{AppState, create_router};
use rate_plan_engine::config::ConfigLoader;
use rate_plan_engine::detection::{find_dips, find_duplicate_plans, would_duplicate};
use rate_plan_engine::models::{
    AvailabilitySample, CandidateDay, DateWindow, DuplicateGroup, PlanId, PriceFields, RateDay,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn window(from: &str, to: &str) -> DateWindow {
    DateWindow::new(make_date(from), make_date(to)).unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn standard_prices() -> PriceFields {
    PriceFields {
        default_rate: Some(dec("100")),
        child: Some(dec("50")),
        ..Default::default()
    }
}

fn plan(plan_id: PlanId, dates: &[&str], prices: &PriceFields) -> Vec<RateDay> {
    dates
        .iter()
        .map(|date| RateDay {
            plan_id,
            date: make_date(date),
            prices: prices.clone(),
        })
        .collect()
}

fn candidate(dates: &[&str], prices: &PriceFields) -> Vec<CandidateDay> {
    dates
        .iter()
        .map(|date| CandidateDay {
            date: make_date(date),
            prices: prices.clone(),
        })
        .collect()
}

fn as_sets(groups: &[DuplicateGroup]) -> HashSet<Vec<PlanId>> {
    groups.iter().map(DuplicateGroup::members).collect()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

const AUGUST: [&str; 3] = ["2025-08-01", "2025-08-02", "2025-08-03"];

// =============================================================================
// Duplicate Scan
// =============================================================================

/// Plans 1 and 2 both priced 100/50 on 2025-08-01..03 form one group.
#[test]
fn test_two_identical_plans_form_one_group() {
    let mut days = plan(1, &AUGUST, &standard_prices());
    days.extend(plan(2, &AUGUST, &standard_prices()));

    let report = find_duplicate_plans(&days, &window("2025-08-01", "2025-08-03"));

    let expected: HashSet<Vec<PlanId>> = [vec![1, 2]].into_iter().collect();
    assert_eq!(as_sets(&report.groups), expected);
}

/// Plan 2 missing 2025-08-02 entirely yields no groups.
#[test]
fn test_plan_missing_one_date_is_not_grouped() {
    let mut days = plan(1, &AUGUST, &standard_prices());
    days.extend(plan(2, &["2025-08-01", "2025-08-03"], &standard_prices()));

    let report = find_duplicate_plans(&days, &window("2025-08-01", "2025-08-03"));

    assert!(report.groups.is_empty());
    assert_eq!(report.incomplete_plans, vec![2]);
}

#[test]
fn test_null_and_absent_fields_group_together() {
    let days: Vec<RateDay> = serde_json::from_value(json!([
        {"planId": 1, "date": "2025-08-01", "defaultRate": 100, "pax3": null},
        {"planId": 2, "date": "2025-08-01", "defaultRate": "100.00"}
    ]))
    .unwrap();

    let report = find_duplicate_plans(&days, &DateWindow::single_day(make_date("2025-08-01")));
    assert_eq!(report.groups.len(), 1);
}

#[test]
fn test_scan_does_not_mutate_input() {
    let mut days = plan(1, &AUGUST, &standard_prices());
    days.extend(plan(2, &AUGUST, &standard_prices()));
    let snapshot = days.clone();

    let _ = find_duplicate_plans(&days, &window("2025-08-01", "2025-08-03"));
    assert_eq!(days, snapshot);
}

// =============================================================================
// Candidate Check
// =============================================================================

#[test]
fn test_candidate_matching_both_duplicates() {
    let mut existing = plan(1, &AUGUST, &standard_prices());
    existing.extend(plan(2, &AUGUST, &standard_prices()));

    let check = would_duplicate(
        &existing,
        &candidate(&AUGUST, &standard_prices()),
        &window("2025-08-01", "2025-08-03"),
    )
    .unwrap();

    assert!(check.is_duplicate);
    let conflicts: HashSet<PlanId> = check.conflicting_plan_ids.into_iter().collect();
    assert_eq!(conflicts, [1, 2].into_iter().collect());
}

#[test]
fn test_candidate_repeated_check_is_stable() {
    let existing = plan(3, &AUGUST, &standard_prices());
    let proposed = candidate(&AUGUST, &standard_prices());
    let w = window("2025-08-01", "2025-08-03");

    let first = would_duplicate(&existing, &proposed, &w).unwrap();
    let second = would_duplicate(&existing, &proposed, &w).unwrap();

    assert!(first.is_duplicate);
    assert_eq!(first.conflicting_plan_ids, vec![3]);
    assert_eq!(first, second);
}

#[test]
fn test_candidate_matching_only_some_dates_is_not_duplicate() {
    let existing = plan(1, &AUGUST, &standard_prices());
    let mut proposed = candidate(&["2025-08-01", "2025-08-02"], &standard_prices());
    proposed.extend(candidate(
        &["2025-08-03"],
        &PriceFields {
            pax2: Some(dec("160")),
            ..standard_prices()
        },
    ));

    let check =
        would_duplicate(&existing, &proposed, &window("2025-08-01", "2025-08-03")).unwrap();
    assert!(!check.is_duplicate);
    assert!(check.conflicting_plan_ids.is_empty());
}

// =============================================================================
// Availability Dips
// =============================================================================

#[test]
fn test_dip_boundary() {
    let at = [AvailabilitySample {
        date: make_date("2025-01-01"),
        count: 5,
    }];
    assert!(find_dips(5, &at).unwrap().is_empty());

    let below = [AvailabilitySample {
        date: make_date("2025-01-01"),
        count: 4,
    }];
    let dips = find_dips(5, &below).unwrap();
    assert_eq!(dips.len(), 1);
    assert_eq!(dips[0].available, 4);
    assert_eq!(dips[0].expected, 5);
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_scan_then_check_before_create() {
    let existing = json!([
        {"planId": 1, "date": "2025-08-01", "defaultRate": 100, "child": 50},
        {"planId": 1, "date": "2025-08-02", "defaultRate": 100, "child": 50},
        {"planId": 1, "date": "2025-08-03", "defaultRate": 100, "child": 50},
        {"planId": 2, "date": "2025-08-01", "defaultRate": 100, "child": 50},
        {"planId": 2, "date": "2025-08-02", "defaultRate": 100, "child": 50},
        {"planId": 2, "date": "2025-08-03", "defaultRate": 100, "child": 50}
    ]);
    let window = json!({"from": "2025-08-01", "to": "2025-08-03"});

    let (status, report) = post_json(
        create_router_for_test(),
        "/rate-plans/duplicates",
        json!({"window": window, "days": existing}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["groups"], json!([[1, 2]]));
    assert_eq!(report["incompletePlans"], json!([]));
    assert_eq!(report["window"], window);

    let (status, check) = post_json(
        create_router_for_test(),
        "/rate-plans/duplicates/check",
        json!({
            "window": window,
            "existingDays": existing,
            "candidateDays": [
                {"date": "2025-08-01", "defaultRate": 100, "child": 50},
                {"date": "2025-08-02", "defaultRate": 100, "child": 50},
                {"date": "2025-08-03", "defaultRate": 100, "child": 50}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["isDuplicate"], true);
    assert_eq!(check["conflictingPlanIds"], json!([1, 2]));
}

#[tokio::test]
async fn test_api_check_missing_candidate_days_returns_400() {
    let (status, json) = post_json(
        create_router_for_test(),
        "/rate-plans/duplicates/check",
        json!({"window": {"from": "2025-08-01", "to": "2025-08-01"}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("candidateDays"));
}

#[tokio::test]
async fn test_api_dips_with_explicit_expected() {
    let (status, json) = post_json(
        create_router_for_test(),
        "/availability/dips",
        json!({
            "expected": 10,
            "series": [
                {"date": "2025-03-01", "count": 10},
                {"date": "2025-03-02", "count": 7},
                {"date": "2025-03-03", "count": 12},
                {"date": "2025-03-04", "count": 0}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["dips"],
        json!([
            {"date": "2025-03-02", "available": 7, "expected": 10},
            {"date": "2025-03-04", "available": 0, "expected": 10}
        ])
    );
}

#[tokio::test]
async fn test_api_negative_sample_returns_400() {
    let (status, json) = post_json(
        create_router_for_test(),
        "/availability/dips",
        json!({"expected": 3, "series": [{"date": "2025-03-01", "count": -1}]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/availability/dips")
                .body(Body::from(r#"{"expected": 1, "series": []}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Properties
// =============================================================================

fn price_strategy() -> impl Strategy<Value = PriceFields> {
    (
        prop::option::of(0i64..4),
        prop::option::of(0i64..3),
        prop::option::of(0i64..2),
    )
        .prop_map(|(default_rate, child, sell_mode)| PriceFields {
            default_rate: default_rate.map(|r| Decimal::new(100 + r * 10, 0)),
            child: child.map(|c| Decimal::new(40 + c * 5, 0)),
            sell_mode,
            ..Default::default()
        })
}

/// Up to six plans over a four-day window, each day optionally missing.
fn days_strategy() -> impl Strategy<Value = Vec<RateDay>> {
    prop::collection::vec(
        (0i64..6, 0i64..4, price_strategy()),
        0..30,
    )
    .prop_map(|entries| {
        let start = make_date("2025-08-01");
        entries
            .into_iter()
            .map(|(plan_id, offset, prices)| RateDay {
                plan_id,
                date: start + chrono::Duration::days(offset),
                prices,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_grouping_ignores_order_of_distinct_records(days in days_strategy()) {
        // Keep only the last record per (plan, date) so reordering cannot
        // change which duplicate wins.
        let mut seen = HashSet::new();
        let mut unique: Vec<RateDay> = days
            .into_iter()
            .rev()
            .filter(|day| seen.insert((day.plan_id, day.date)))
            .collect();

        let w = window("2025-08-01", "2025-08-04");
        let forward = find_duplicate_plans(&unique, &w);
        unique.reverse();
        let backward = find_duplicate_plans(&unique, &w);

        prop_assert_eq!(as_sets(&forward.groups), as_sets(&backward.groups));
    }

    #[test]
    fn prop_groups_are_disjoint_and_at_least_two(days in days_strategy()) {
        let report = find_duplicate_plans(&days, &window("2025-08-01", "2025-08-04"));

        let mut seen = HashSet::new();
        for group in &report.groups {
            prop_assert!(group.len() >= 2);
            for plan_id in group.iter() {
                prop_assert!(seen.insert(plan_id));
            }
        }
    }

    #[test]
    fn prop_copied_plan_is_always_flagged(days in days_strategy(), source in 0i64..6) {
        let w = window("2025-08-01", "2025-08-04");
        let proposed: Vec<CandidateDay> = days
            .iter()
            .filter(|day| day.plan_id == source)
            .map(|day| CandidateDay { date: day.date, prices: day.prices.clone() })
            .collect();
        prop_assume!(!proposed.is_empty());

        let first = would_duplicate(&days, &proposed, &w).unwrap();
        let second = would_duplicate(&days, &proposed, &w).unwrap();

        prop_assert!(first.is_duplicate);
        prop_assert!(first.conflicting_plan_ids.contains(&source));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_dips_are_exactly_samples_below_expected(
        counts in prop::collection::vec(0i64..10, 0..20),
        expected in 0i64..10,
    ) {
        let start = make_date("2025-01-01");
        let series: Vec<AvailabilitySample> = counts
            .iter()
            .enumerate()
            .map(|(i, count)| AvailabilitySample {
                date: start + chrono::Duration::days(i as i64),
                count: *count,
            })
            .collect();

        let dips = find_dips(expected, &series).unwrap();

        prop_assert_eq!(dips.len(), counts.iter().filter(|c| **c < expected).count());
        for dip in &dips {
            prop_assert!(dip.available < dip.expected);
            prop_assert_eq!(dip.expected, expected);
        }
    }
}
