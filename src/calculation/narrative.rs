//! Headline summary and assumption log.

use rust_decimal::Decimal;

use crate::models::CalculatorInput;

use super::{format_amount, format_points};

/// Sentence used when questionnaire answers refined the estimate.
pub const REFINED_ESTIMATE_ASSUMPTION: &str =
    "Refined estimate: questionnaire answers were applied (residency, children, degree, donations).";

/// Sentence used when only Form 106 data was available.
pub const BASIC_ESTIMATE_ASSUMPTION: &str =
    "Basic estimate: Form 106 data only, without the questionnaire.";

/// Summary used when neither a refund nor tax due is expected.
pub const NEUTRAL_SUMMARY: &str = "No refund or tax due based on the data entered.";

/// Builds the ordered assumption log.
///
/// The refinement sentence reports the questionnaire as applied once the
/// residency question has been answered.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::build_assumptions;
/// use refund_estimator::models::{CalculatorInput, Form106Entry};
/// use rust_decimal::Decimal;
///
/// let input = CalculatorInput::new(2024, vec![Form106Entry::new(Decimal::from(60_000), Decimal::from(5_500))]);
/// let assumptions = build_assumptions(&input, Decimal::ZERO);
/// assert_eq!(assumptions[0], "Tax year: 2024");
/// assert_eq!(assumptions[2], "Total taxable income: 60,000 ₪");
/// assert_eq!(assumptions[4], "Credit points used: 0.00");
/// ```
pub fn build_assumptions(input: &CalculatorInput, credit_points: Decimal) -> Vec<String> {
    let refined = input
        .questionnaire
        .as_ref()
        .is_some_and(|q| q.residency.is_some());

    vec![
        format!("Tax year: {}", input.year),
        format!("Form 106 count: {}", input.forms.len()),
        format!(
            "Total taxable income: {}",
            format_amount(input.taxable_income_total())
        ),
        format!("Total tax withheld: {}", format_amount(input.withheld_total())),
        format!("Credit points used: {}", format_points(credit_points)),
        if refined {
            REFINED_ESTIMATE_ASSUMPTION.to_string()
        } else {
            BASIC_ESTIMATE_ASSUMPTION.to_string()
        },
    ]
}

/// Builds the headline sentence.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::build_summary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(build_summary(Decimal::from(5_498), Decimal::ZERO), "Estimated refund: 5,498 ₪");
/// assert_eq!(build_summary(Decimal::ZERO, Decimal::from(1_200)), "Possible tax due: 1,200 ₪");
/// ```
pub fn build_summary(refund: Decimal, underpayment: Decimal) -> String {
    if refund > Decimal::ZERO {
        format!("Estimated refund: {}", format_amount(refund))
    } else if underpayment > Decimal::ZERO {
        format!("Possible tax due: {}", format_amount(underpayment))
    } else {
        NEUTRAL_SUMMARY.to_string()
    }
}
