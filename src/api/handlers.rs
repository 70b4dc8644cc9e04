//! HTTP request handlers for the refund estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;
use crate::error::EngineError;

use super::request::EstimateRequest;
use super::response::{ApiError, ApiErrorResponse, EstimateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/years", get(years_handler))
        .with_state(state)
}

fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
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
    }
}

/// Handler for POST /estimate.
///
/// Validates the request, runs the engine and wraps the result in an
/// [`EstimateResponse`] envelope.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_error(correlation_id, rejection),
            }
            .into_response();
        }
    };

    let year = request.year;
    let input = match request.into_input() {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request validation failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    if !state.params().supports(year) {
        warn!(correlation_id = %correlation_id, year, "Tax year not supported");
        return ApiErrorResponse::from(EngineError::UnsupportedYear { year }).into_response();
    }

    let start_time = Instant::now();
    match calculate(&input, state.params()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                year,
                forms_count = input.forms.len(),
                refund = %result.refund_estimate,
                underpayment = %result.underpayment_estimate,
                confidence = ?result.confidence,
                duration_us = start_time.elapsed().as_micros(),
                "Estimate completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(EstimateResponse::new(correlation_id, result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /years.
///
/// Lists the supported tax years in ascending order.
async fn years_handler(State(state): State<AppState>) -> Json<Vec<i32>> {
    Json(state.params().years())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::FormRequest;
    use axum::body::{Body, Bytes};
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_valid_request() -> EstimateRequest {
        EstimateRequest {
            year: 2024,
            forms: vec![FormRequest {
                taxable_income: dec("100000"),
                income_tax_withheld: dec("10000"),
                credit_points_granted: Some(dec("2.25")),
                has_complexity_flags: false,
            }],
            questionnaire: None,
        }
    }

    async fn post_estimate(body: String) -> (StatusCode, Bytes) {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();
        let (status, body) = post_estimate(body).await;

        assert_eq!(status, StatusCode::OK);
        let response: EstimateResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
        // 10,635.2 gross less 6,534 of points
        assert_eq!(response.result.totals.liability, dec("4101.2"));
        assert_eq!(response.result.refund_estimate, dec("5898.8"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = post_estimate("{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_forms_field_returns_validation_error() {
        let (status, body) = post_estimate(r#"{"year": 2024}"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_unsupported_year_returns_400() {
        let mut request = create_valid_request();
        request.year = 2019;
        let (status, body) = post_estimate(serde_json::to_string(&request).unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNSUPPORTED_YEAR");
    }

    #[tokio::test]
    async fn test_validation_error_is_json() {
        let mut request = create_valid_request();
        request.forms[0].taxable_income = dec("-1");
        let router = create_router(AppState::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(serde_json::to_string(&request).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn test_years_lists_builtin_table() {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(Request::builder().uri("/years").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let years: Vec<i32> = serde_json::from_slice(&body).unwrap();
        assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024, 2025]);
    }
}
