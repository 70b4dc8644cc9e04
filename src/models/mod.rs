//! Core data models for the refund estimator.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod form;
mod input;
mod questionnaire;

pub use calculation_result::{
    AuditStep, BreakdownItem, BreakdownKey, CalculationResult, Confidence, TaxTotals,
};
pub use form::Form106Entry;
pub use input::CalculatorInput;
pub use questionnaire::{DegreeType, QuestionnaireAnswers, ResidencyAnswer, YesNo};
