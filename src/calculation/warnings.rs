//! Cautionary warnings about the input or the outcome.

use rust_decimal::Decimal;

use crate::models::CalculatorInput;

/// Zero taxable income but tax was withheld.
pub const ZERO_INCOME_WITHHELD_WARNING: &str =
    "Taxable income is 0 but tax was withheld; check the figures entered.";

/// Every one of several employers granted credit points.
pub const DUPLICATE_CREDIT_POINTS_WARNING: &str = "Credit points may have been granted by more than one employer; tax coordination can prevent excess withholding.";

/// The estimate ends in tax due.
pub const POSSIBLE_DEBT_WARNING: &str =
    "Tax may be due; consider filing an annual return or consulting a professional.";

/// Evaluates every warning independently and returns those that fire, in
/// fixed order.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::{collect_warnings, ZERO_INCOME_WITHHELD_WARNING};
/// use refund_estimator::models::{CalculatorInput, Form106Entry};
/// use rust_decimal::Decimal;
///
/// let input = CalculatorInput::new(2024, vec![Form106Entry::new(Decimal::ZERO, Decimal::from(1_000))]);
/// let warnings = collect_warnings(&input, Decimal::ZERO);
/// assert_eq!(warnings, vec![ZERO_INCOME_WITHHELD_WARNING.to_string()]);
/// ```
pub fn collect_warnings(input: &CalculatorInput, underpayment: Decimal) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.taxable_income_total().is_zero() && input.withheld_total() > Decimal::ZERO {
        warnings.push(ZERO_INCOME_WITHHELD_WARNING.to_string());
    }

    if input.forms.len() > 1 && input.forms.iter().all(|f| f.has_credit_points()) {
        warnings.push(DUPLICATE_CREDIT_POINTS_WARNING.to_string());
    }

    if underpayment > Decimal::ZERO {
        warnings.push(POSSIBLE_DEBT_WARNING.to_string());
    }

    warnings
}
