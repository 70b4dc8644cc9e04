//! End-to-end tests for the refund estimator HTTP API.
//!
//! This test suite covers:
//! - Refund and tax-due outcomes for single and multiple employers
//! - Questionnaire-driven credit points (residency, gender, degree, children)
//! - The section 46 donation credit
//! - Warnings and confidence classification
//! - Request validation and error responses
//! - Loading an alternative parameter file

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use refund_estimator::api::{AppState, create_router};
use refund_estimator::config::ParameterTable;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::default())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_estimate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/estimate")
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

fn form(income: &str, withheld: &str, points: &str) -> Value {
    json!({
        "taxable_income": income,
        "income_tax_withheld": withheld,
        "credit_points_granted": points
    })
}

fn create_request(year: i32, forms: Vec<Value>, questionnaire: Option<Value>) -> Value {
    let mut request = json!({ "year": year, "forms": forms });
    if let Some(q) = questionnaire {
        request["questionnaire"] = q;
    }
    request
}

fn amount(result: &Value, field: &str) -> Decimal {
    let value = &result["result"][field];
    decimal(value.as_str().unwrap_or_else(|| panic!("{} missing: {}", field, result)))
}

fn total(result: &Value, field: &str) -> Decimal {
    decimal(result["result"]["totals"][field].as_str().unwrap())
}

fn warnings(result: &Value) -> Vec<String> {
    result["result"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Outcomes
// =============================================================================

#[tokio::test]
async fn test_partial_year_resident_full_refund() {
    let request = create_request(
        2024,
        vec![form("60000", "5500", "0")],
        Some(json!({ "residency": "yes" })),
    );
    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&result, "refund_estimate"), decimal("5500"));
    assert_eq!(amount(&result, "underpayment_estimate"), Decimal::ZERO);
    assert_eq!(total(&result, "gross_tax"), decimal("6000"));
    assert_eq!(total(&result, "liability"), Decimal::ZERO);
    assert_eq!(result["result"]["result_summary"], "Estimated refund: 5,500 ₪");
    assert_eq!(result["result"]["confidence"], "high");
}

#[tokio::test]
async fn test_same_form_without_questionnaire_shows_tax_due() {
    let request = create_request(2024, vec![form("60000", "5500", "0")], None);
    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&result, "refund_estimate"), Decimal::ZERO);
    assert_eq!(amount(&result, "underpayment_estimate"), decimal("500"));
    assert_eq!(result["result"]["result_summary"], "Possible tax due: 500 ₪");
    assert_eq!(result["result"]["confidence"], "medium");
    assert!(
        warnings(&result)
            .iter()
            .any(|w| w.starts_with("Tax may be due"))
    );
}

#[tokio::test]
async fn test_two_employers_with_residency() {
    let request = create_request(
        2024,
        vec![form("120000", "12000", "2.25"), form("120000", "30000", "0")],
        Some(json!({ "residency": "yes" })),
    );
    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(total(&result, "taxable_income_total"), decimal("240000"));
    assert_eq!(total(&result, "gross_tax"), decimal("42474"));
    assert_eq!(total(&result, "liability"), decimal("35940"));
    assert_eq!(amount(&result, "refund_estimate"), decimal("6060"));
    assert_eq!(result["result"]["confidence"], "high");
}

#[tokio::test]
async fn test_two_employers_without_questionnaire_is_medium() {
    let request = create_request(
        2024,
        vec![form("120000", "12000", "2.25"), form("120000", "30000", "0")],
        None,
    );
    let (_, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(result["result"]["confidence"], "medium");
}

#[tokio::test]
async fn test_degree_and_gender_credit_points() {
    let request = create_request(
        2024,
        vec![form("180000", "20000", "2.25")],
        Some(json!({
            "residency": "yes",
            "gender_credit": "yes",
            "degree_type": "first",
            "graduation_year": 2023
        })),
    );
    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(total(&result, "gross_tax"), decimal("25392"));
    assert_eq!(total(&result, "credit_points_value"), decimal("10890"));
    assert_eq!(amount(&result, "refund_estimate"), decimal("5498"));

    let assumptions = result["result"]["assumptions"].as_array().unwrap();
    assert!(assumptions.iter().any(|a| a == "Credit points used: 3.75"));
}

#[tokio::test]
async fn test_children_add_credit_points() {
    let request = create_request(
        2024,
        vec![form("180000", "20000", "2.25")],
        Some(json!({
            "residency": "yes",
            "children_birth_years": [2008, 2010, 2012, 2015, 2018, 2020, 2022, 2000]
        })),
    );
    let (_, result) = post_estimate(create_router_for_test(), request).await;

    // seven qualifying children capped at 3 points; the one born in 2000 is too old
    assert_eq!(
        total(&result, "credit_points_value"),
        decimal("5.25") * decimal("2904")
    );
}

#[tokio::test]
async fn test_donation_reduces_liability() {
    let request = create_request(
        2024,
        vec![form("100000", "10000", "2.25")],
        Some(json!({ "residency": "yes", "donations_total": "10000" })),
    );
    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(total(&result, "liability"), decimal("601.2"));
    assert_eq!(amount(&result, "refund_estimate"), decimal("9398.8"));

    let items = result["result"]["breakdown_items"].as_array().unwrap();
    let donation = items.iter().find(|i| i["key"] == "donation").unwrap();
    assert_eq!(decimal(donation["amount"].as_str().unwrap()), decimal("-3500"));
}

#[tokio::test]
async fn test_zero_income_with_withholding() {
    let request = create_request(2024, vec![form("0", "1000", "0")], None);
    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&result, "refund_estimate"), decimal("1000"));
    assert_eq!(result["result"]["confidence"], "medium");
    assert!(
        warnings(&result)
            .iter()
            .any(|w| w.starts_with("Taxable income is 0"))
    );
}

#[tokio::test]
async fn test_complexity_flag_forces_low_confidence() {
    let mut flagged = form("100000", "10000", "2.25");
    flagged["has_complexity_flags"] = json!(true);
    let request = create_request(2024, vec![flagged], Some(json!({ "residency": "yes" })));
    let (_, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(result["result"]["confidence"], "low");
}

#[tokio::test]
async fn test_additional_income_forces_low_confidence() {
    let request = create_request(
        2024,
        vec![form("100000", "10000", "2.25")],
        Some(json!({ "residency": "yes", "has_additional_income": true })),
    );
    let (_, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(result["result"]["confidence"], "low");
}

#[tokio::test]
async fn test_empty_questionnaire_treated_as_absent() {
    let with_empty = create_request(2024, vec![form("60000", "5500", "0")], Some(json!({})));
    let without = create_request(2024, vec![form("60000", "5500", "0")], None);

    let (_, a) = post_estimate(create_router_for_test(), with_empty).await;
    let (_, b) = post_estimate(create_router_for_test(), without).await;

    assert_eq!(a["result"], b["result"]);
}

#[tokio::test]
async fn test_response_envelope_and_audit_trace() {
    let request = create_request(2023, vec![form("150000", "20000", "2.25")], None);
    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert!(result["engine_version"].is_string());

    let steps = result["result"]["audit_trace"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["rule_id"], "gross_tax");
    assert_eq!(steps[4]["rule_id"], "confidence");

    let items = result["result"]["breakdown_items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_unsupported_year_returns_400() {
    let request = create_request(2030, vec![form("60000", "5500", "0")], None);
    let (status, error) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "UNSUPPORTED_YEAR");
}

#[tokio::test]
async fn test_empty_forms_returns_400() {
    let request = create_request(2024, vec![], None);
    let (status, error) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "forms");
}

#[tokio::test]
async fn test_withheld_above_income_returns_400() {
    let request = create_request(2024, vec![form("10000", "20000", "0")], None);
    let (status, error) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "forms[0].income_tax_withheld");
}

#[tokio::test]
async fn test_unknown_residency_answer_returns_400() {
    let request = create_request(
        2024,
        vec![form("60000", "5500", "0")],
        Some(json!({ "residency": "sometimes" })),
    );
    let (status, error) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_huge_amounts_rejected_without_overflow() {
    let huge = "50000000000000000000000000000";
    let request = create_request(2024, vec![form(huge, "0", "0"), form(huge, "0", "0")], None);
    let (status, error) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "forms[0].taxable_income");
}

#[tokio::test]
async fn test_huge_donation_rejected() {
    let request = create_request(
        2024,
        vec![form("60000", "5500", "0")],
        Some(json!({ "donations_total": "50000000000000000000000000000" })),
    );
    let (status, error) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"], "questionnaire.donations_total");
}

#[tokio::test]
async fn test_extreme_graduation_year_rejected() {
    let request = create_request(
        2024,
        vec![form("60000", "5500", "0")],
        Some(json!({ "degree_type": "first", "graduation_year": i32::MIN })),
    );
    let (status, error) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "questionnaire.graduation_year");
}

#[tokio::test]
async fn test_extreme_birth_year_rejected() {
    let request = create_request(
        2024,
        vec![form("60000", "5500", "0")],
        Some(json!({ "children_birth_years": [i32::MIN] })),
    );
    let (status, error) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"], "questionnaire.children_birth_years[0]");
}

// =============================================================================
// Parameter tables
// =============================================================================

#[tokio::test]
async fn test_router_uses_loaded_parameter_file() {
    let table = ParameterTable::load("./config/tax_years.yaml").expect("Failed to load params");
    let router = create_router(AppState::new(table));

    let request = create_request(
        2024,
        vec![form("60000", "5500", "0")],
        Some(json!({ "residency": "yes" })),
    );
    let (status, result) = post_estimate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&result, "refund_estimate"), decimal("5500"));
}

#[tokio::test]
async fn test_years_endpoint() {
    let response = create_router_for_test()
        .oneshot(Request::builder().uri("/years").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!([2020, 2021, 2022, 2023, 2024, 2025]));
}
