//! Error types for the refund estimator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine, the parameter table and the API
//! boundary can report.

use thiserror::Error;

/// The main error type for the refund estimator.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use refund_estimator::error::EngineError;
///
/// let error = EngineError::UnsupportedYear { year: 2019 };
/// assert_eq!(error.to_string(), "Unsupported tax year: 2019");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No parameters exist for the requested tax year.
    #[error("Unsupported tax year: {year}")]
    UnsupportedYear {
        /// The year that was requested.
        year: i32,
    },

    /// The calculation input did not contain any Form 106 entries.
    #[error("At least one Form 106 entry is required")]
    EmptyForms,

    /// Parameter file was not found at the specified path.
    #[error("Parameter file not found: {path}")]
    ParameterFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Parameter file could not be parsed.
    #[error("Failed to parse parameter file '{path}': {message}")]
    ParameterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A year's parameter row breaks the bracket or rate invariants.
    #[error("Invalid parameters for tax year {year}: {message}")]
    InvalidParameters {
        /// The tax year of the offending row.
        year: i32,
        /// A description of the violated invariant.
        message: String,
    },

    /// A request field failed boundary validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
