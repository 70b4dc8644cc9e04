//! Tax parameter tables for the refund estimator.
//!
//! This module provides the per-year tax parameters (bracket schedule,
//! surtax threshold and rate, credit point value), either from the built-in
//! rows or loaded from a YAML file.
//!
//! # Example
//!
//! ```
//! use refund_estimator::config::ParameterTable;
//!
//! let table = ParameterTable::builtin();
//! let params = table.get(2023).unwrap();
//! println!("Credit point value: {}", params.credit_point_value_annual);
//! ```

mod builtin;
mod loader;
mod types;

pub use loader::ParameterTable;
pub use types::{ParameterFile, TaxBracket, YearParameters};
