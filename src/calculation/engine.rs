//! The estimate orchestrator.
//!
//! [`calculate`] runs every rule in order against one input and one
//! parameter table and assembles the immutable result. It keeps no state
//! between calls.

use tracing::debug;

use crate::config::ParameterTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, CalculatorInput, TaxTotals};

use super::{
    BreakdownAmounts, build_assumptions, build_breakdown, build_summary, calculate_confidence,
    calculate_credit_points, calculate_donation_credit, calculate_gross_tax, calculate_liability,
    collect_warnings,
};

/// Estimates the refund or tax due for one tax year.
///
/// # Errors
///
/// - [`EngineError::EmptyForms`] when `input.forms` is empty.
/// - [`EngineError::UnsupportedYear`] when the table has no row for
///   `input.year`.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::calculate;
/// use refund_estimator::config::ParameterTable;
/// use refund_estimator::models::{
///     CalculatorInput, Form106Entry, QuestionnaireAnswers, ResidencyAnswer,
/// };
/// use rust_decimal::Decimal;
///
/// let input = CalculatorInput::new(
///     2024,
///     vec![Form106Entry::new(Decimal::from(60_000), Decimal::from(5_500))],
/// )
/// .with_questionnaire(QuestionnaireAnswers {
///     residency: Some(ResidencyAnswer::Yes),
///     ..Default::default()
/// });
///
/// let result = calculate(&input, &ParameterTable::builtin()).unwrap();
/// assert_eq!(result.refund_estimate, Decimal::from(5_500));
/// assert_eq!(result.totals.liability, Decimal::ZERO);
/// assert_eq!(result.totals.credit_points_value, Decimal::from(6_534));
/// ```
pub fn calculate(
    input: &CalculatorInput,
    table: &ParameterTable,
) -> EngineResult<CalculationResult> {
    if input.forms.is_empty() {
        return Err(EngineError::EmptyForms);
    }
    let params = table.get(input.year)?;

    let taxable_income_total = input.taxable_income_total();
    let withheld_total = input.withheld_total();
    let questionnaire = input.questionnaire.as_ref();

    let mut audit_trace = Vec::with_capacity(5);
    let mut step_number: u32 = 1;

    let gross = calculate_gross_tax(taxable_income_total, params, step_number);
    audit_trace.push(gross.audit_step);
    step_number += 1;

    let points = calculate_credit_points(&input.forms, questionnaire, input.year, step_number);
    let credit_points_value = points.total_points * params.credit_point_value_annual;
    audit_trace.push(points.audit_step);
    step_number += 1;

    let donation = calculate_donation_credit(
        questionnaire.and_then(|q| q.donations_total),
        taxable_income_total,
        step_number,
    );
    audit_trace.push(donation.audit_step);
    step_number += 1;

    let settled = calculate_liability(
        gross.gross_tax,
        credit_points_value,
        donation.credit,
        withheld_total,
        step_number,
    );
    audit_trace.push(settled.audit_step);
    step_number += 1;

    let warnings = collect_warnings(input, settled.underpayment);

    let confidence = calculate_confidence(input, !warnings.is_empty(), step_number);
    audit_trace.push(confidence.audit_step);

    let breakdown_items = build_breakdown(&BreakdownAmounts {
        gross_tax: gross.gross_tax,
        credit_points: points.total_points,
        credit_points_value,
        donation_credit: donation.credit,
        liability: settled.liability,
        withheld: withheld_total,
    });
    let assumptions = build_assumptions(input, points.total_points);
    let result_summary = build_summary(settled.refund, settled.underpayment);

    debug!(
        year = input.year,
        forms = input.forms.len(),
        liability = %settled.liability,
        refund = %settled.refund,
        underpayment = %settled.underpayment,
        confidence = ?confidence.confidence,
        "Estimate calculated"
    );

    Ok(CalculationResult {
        result_summary,
        refund_estimate: settled.refund,
        underpayment_estimate: settled.underpayment,
        totals: TaxTotals {
            taxable_income_total,
            withheld_total,
            gross_tax: gross.gross_tax,
            credit_points_value,
            liability: settled.liability,
        },
        breakdown_items,
        assumptions,
        warnings,
        confidence: confidence.confidence,
        audit_trace,
    })
}
