//! HTTP API module for the refund estimator.
//!
//! This module provides the REST endpoints for estimating a refund from
//! Form 106 figures and listing the supported tax years.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EstimateRequest, FormRequest, MAX_AMOUNT, MAX_CREDIT_POINTS, MAX_FORMS, MIN_CALENDAR_YEAR,
};
pub use response::{ApiError, ApiErrorResponse, EstimateResponse};
pub use state::AppState;
