//! Parameter table loading functionality.
//!
//! This module provides the [`ParameterTable`] type, the year to parameters
//! lookup the engine reads from. It is either the built-in table or one
//! loaded from a YAML file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::builtin::builtin_years;
use super::types::{ParameterFile, YearParameters};

/// Immutable lookup of tax parameters by year.
///
/// The table is built once and passed to the engine explicitly, so tests
/// and deployments can substitute an alternate parameter set.
///
/// # File Format
///
/// ```text
/// years:
///   2024:
///     brackets:
///       - { upper_limit: "84120", rate: "0.10" }
///       ...
///       - { rate: "0.47" }          # unbounded top bracket
///     surtax_threshold: "721560"
///     surtax_rate: "0.03"
///     credit_point_value_annual: "2904"
/// ```
///
/// # Example
///
/// ```
/// use refund_estimator::config::ParameterTable;
///
/// let table = ParameterTable::builtin();
/// assert_eq!(table.years(), vec![2020, 2021, 2022, 2023, 2024, 2025]);
/// assert!(table.get(2019).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTable {
    years: BTreeMap<i32, YearParameters>,
}

impl ParameterTable {
    /// Returns the built-in table covering 2020 to 2025.
    pub fn builtin() -> Self {
        Self {
            years: builtin_years(),
        }
    }

    /// Builds a table from explicit rows, validating each one.
    pub fn from_years(years: BTreeMap<i32, YearParameters>) -> EngineResult<Self> {
        for (year, params) in &years {
            params.validate(*year)?;
        }
        Ok(Self { years })
    }

    /// Loads a parameter table from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ParameterTable` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or is missing required fields
    /// - Any year's row breaks the bracket invariants
    ///
    /// # Example
    ///
    /// ```no_run
    /// use refund_estimator::config::ParameterTable;
    ///
    /// let table = ParameterTable::load("./config/tax_years.yaml")?;
    /// # Ok::<(), refund_estimator::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ParameterFileNotFound {
            path: path_str.clone(),
        })?;

        let file: ParameterFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ParameterParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        if file.years.is_empty() {
            return Err(EngineError::ParameterParseError {
                path: path_str,
                message: "no tax years defined".to_string(),
            });
        }

        Self::from_years(file.years)
    }

    /// Gets the parameters for a tax year.
    ///
    /// Returns `UnsupportedYear` when the year has no row.
    pub fn get(&self, year: i32) -> EngineResult<&YearParameters> {
        self.years
            .get(&year)
            .ok_or(EngineError::UnsupportedYear { year })
    }

    /// Returns true if the table has a row for the year.
    pub fn supports(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Returns the supported years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }
}

impl Default for ParameterTable {
    fn default() -> Self {
        Self::builtin()
    }
}
