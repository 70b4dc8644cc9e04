//! Form 106 model.
//!
//! A Form 106 is the annual wage and withholding report an employer issues
//! for each income source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The figures the engine reads from one employer's Form 106.
///
/// Amounts are assumed to be validated and non-negative before they reach
/// the engine.
///
/// # Example
///
/// ```
/// use refund_estimator::models::Form106Entry;
/// use rust_decimal::Decimal;
///
/// let form = Form106Entry::new(Decimal::from(120_000), Decimal::from(12_000))
///     .with_credit_points(Decimal::new(225, 2));
/// assert!(form.has_credit_points());
/// assert!(!form.has_complexity_flags);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form106Entry {
    /// Taxable income for the year from this employer.
    pub taxable_income: Decimal,
    /// Income tax the employer withheld at source.
    pub income_tax_withheld: Decimal,
    /// Credit points the employer applied when withholding.
    #[serde(default)]
    pub credit_points_granted: Decimal,
    /// Marks severance, annuity or special-exemption cases the engine
    /// cannot model precisely.
    #[serde(default)]
    pub has_complexity_flags: bool,
}

impl Form106Entry {
    /// Creates an entry with no credit points and no complexity flags.
    pub fn new(taxable_income: Decimal, income_tax_withheld: Decimal) -> Self {
        Self {
            taxable_income,
            income_tax_withheld,
            credit_points_granted: Decimal::ZERO,
            has_complexity_flags: false,
        }
    }

    /// Sets the credit points granted by the employer.
    pub fn with_credit_points(mut self, points: Decimal) -> Self {
        self.credit_points_granted = points;
        self
    }

    /// Marks the entry as carrying complexity flags.
    pub fn with_complexity_flags(mut self) -> Self {
        self.has_complexity_flags = true;
        self
    }

    /// Returns true if the employer granted any credit points.
    pub fn has_credit_points(&self) -> bool {
        self.credit_points_granted > Decimal::ZERO
    }
}
