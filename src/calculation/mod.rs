//! Calculation logic for the refund estimator.
//!
//! This module contains all the calculation functions for an estimate,
//! including progressive bracket tax, surtax, credit point aggregation from
//! forms and questionnaire answers, the section 46 donation credit,
//! liability and refund settlement, warnings, confidence classification,
//! and the breakdown and assumption text shown with the result.

mod breakdown;
mod brackets;
mod confidence;
mod credit_points;
mod donation;
mod engine;
mod format;
mod gross_tax;
mod liability;
mod narrative;
mod surtax;
mod warnings;

pub use breakdown::{BreakdownAmounts, build_breakdown};
pub use brackets::tax_by_brackets;
pub use confidence::{
    CONFIDENCE_RULES, ConfidenceContext, ConfidenceResult, ConfidenceRule, calculate_confidence,
    classify_confidence,
};
pub use credit_points::{
    BASE_RESIDENCY_POINTS, CHILD_CREDIT_POINTS, CHILD_MAX_AGE, CHILDREN_CREDIT_CAP,
    CreditPointsResult, DEGREE_CREDIT_POINTS, DEGREE_CREDIT_YEARS, GENDER_CREDIT_POINTS,
    calculate_credit_points, children_points, degree_points, total_credit_points,
};
pub use donation::{
    DONATION_CREDIT_RATE, DONATION_INCOME_CEILING, DonationCreditResult,
    calculate_donation_credit, donation_credit,
};
pub use engine::calculate;
pub use format::{CURRENCY_SYMBOL, format_amount, format_number, format_points};
pub use gross_tax::{GrossTaxResult, calculate_gross_tax};
pub use liability::{LiabilityResult, calculate_liability};
pub use narrative::{
    BASIC_ESTIMATE_ASSUMPTION, NEUTRAL_SUMMARY, REFINED_ESTIMATE_ASSUMPTION, build_assumptions,
    build_summary,
};
pub use surtax::surtax;
pub use warnings::{
    DUPLICATE_CREDIT_POINTS_WARNING, POSSIBLE_DEBT_WARNING, ZERO_INCOME_WITHHELD_WARNING,
    collect_warnings,
};
