//! Parameter types for the refund estimator.
//!
//! This module contains the strongly-typed per-year tax parameters that are
//! either built into the crate or deserialized from a YAML parameter file.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One band of the progressive income-tax schedule.
///
/// A bracket taxes income between the previous bracket's upper limit and its
/// own `upper_limit` at `rate`. The top bracket has no upper limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The upper income limit of this bracket, `None` for the top bracket.
    #[serde(default)]
    pub upper_limit: Option<Decimal>,
    /// The marginal rate applied inside this bracket, in [0, 1].
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bounded bracket.
    pub fn bounded(upper_limit: Decimal, rate: Decimal) -> Self {
        Self {
            upper_limit: Some(upper_limit),
            rate,
        }
    }

    /// Creates the unbounded top bracket.
    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_limit: None,
            rate,
        }
    }
}

/// The tax parameters for a single tax year.
///
/// # Example
///
/// ```
/// use refund_estimator::config::ParameterTable;
/// use rust_decimal::Decimal;
///
/// let table = ParameterTable::builtin();
/// let params = table.get(2024).unwrap();
/// assert_eq!(params.credit_point_value_annual, Decimal::from(2904));
/// assert_eq!(params.brackets.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearParameters {
    /// The progressive bracket schedule, ascending by upper limit.
    pub brackets: Vec<TaxBracket>,
    /// Income above this threshold also pays the flat surtax.
    pub surtax_threshold: Decimal,
    /// The flat surtax rate applied above the threshold.
    pub surtax_rate: Decimal,
    /// The annual currency value of one credit point.
    pub credit_point_value_annual: Decimal,
}

impl YearParameters {
    /// Checks the bracket schedule and rates of this row.
    ///
    /// Brackets must be non-empty, strictly ascending with positive limits,
    /// and only the final bracket may be unbounded. Rates must lie in [0, 1].
    pub fn validate(&self, year: i32) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidParameters { year, message };

        if self.brackets.is_empty() {
            return Err(invalid("bracket schedule is empty".to_string()));
        }

        let last = self.brackets.len() - 1;
        let mut previous = Decimal::ZERO;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(invalid(format!(
                    "bracket {} rate {} is outside [0, 1]",
                    index, bracket.rate
                )));
            }
            match bracket.upper_limit {
                Some(limit) if index == last => {
                    return Err(invalid(format!(
                        "top bracket must be unbounded, found upper limit {}",
                        limit
                    )));
                }
                Some(limit) if limit <= previous => {
                    return Err(invalid(format!(
                        "bracket {} upper limit {} does not exceed {}",
                        index, limit, previous
                    )));
                }
                Some(limit) => previous = limit,
                None if index != last => {
                    return Err(invalid(format!(
                        "bracket {} is unbounded but is not the top bracket",
                        index
                    )));
                }
                None => {}
            }
        }

        if self.surtax_threshold < Decimal::ZERO {
            return Err(invalid("surtax threshold is negative".to_string()));
        }
        if self.surtax_rate < Decimal::ZERO || self.surtax_rate > Decimal::ONE {
            return Err(invalid(format!(
                "surtax rate {} is outside [0, 1]",
                self.surtax_rate
            )));
        }
        if self.credit_point_value_annual < Decimal::ZERO {
            return Err(invalid("credit point value is negative".to_string()));
        }

        Ok(())
    }
}

/// Parameter file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterFile {
    /// Map of tax year to that year's parameters.
    pub years: BTreeMap<i32, YearParameters>,
}
