//! Gross tax: bracket tax plus surtax.

use rust_decimal::Decimal;

use crate::config::YearParameters;
use crate::models::AuditStep;

use super::{surtax, tax_by_brackets};

/// The result of computing gross tax, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossTaxResult {
    /// Tax from the progressive schedule alone.
    pub bracket_tax: Decimal,
    /// Surtax above the threshold.
    pub surtax: Decimal,
    /// Bracket tax plus surtax.
    pub gross_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes gross tax on total taxable income for a year's parameters.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::calculate_gross_tax;
/// use refund_estimator::config::ParameterTable;
/// use rust_decimal::Decimal;
///
/// let table = ParameterTable::builtin();
/// let result = calculate_gross_tax(Decimal::from(60_000), table.get(2024).unwrap(), 1);
/// assert_eq!(result.gross_tax, Decimal::from(6_000));
/// assert_eq!(result.audit_step.rule_id, "gross_tax");
/// ```
pub fn calculate_gross_tax(
    taxable_income: Decimal,
    params: &YearParameters,
    step_number: u32,
) -> GrossTaxResult {
    let bracket_tax = tax_by_brackets(taxable_income, &params.brackets);
    let surtax_amount = surtax(taxable_income, params.surtax_threshold, params.surtax_rate);
    let gross_tax = bracket_tax + surtax_amount;

    let reasoning = if surtax_amount > Decimal::ZERO {
        format!(
            "Bracket tax {} + surtax {} ({} above {}) = {}",
            bracket_tax.normalize(),
            surtax_amount.normalize(),
            params.surtax_rate.normalize(),
            params.surtax_threshold.normalize(),
            gross_tax.normalize()
        )
    } else {
        format!(
            "Bracket tax {} on income {}; income does not exceed surtax threshold {}",
            bracket_tax.normalize(),
            taxable_income.normalize(),
            params.surtax_threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_tax".to_string(),
        rule_name: "Gross Tax".to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
            "surtax_threshold": params.surtax_threshold.normalize().to_string(),
            "surtax_rate": params.surtax_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "bracket_tax": bracket_tax.normalize().to_string(),
            "surtax": surtax_amount.normalize().to_string(),
            "gross_tax": gross_tax.normalize().to_string()
        }),
        reasoning,
    };

    GrossTaxResult {
        bracket_tax,
        surtax: surtax_amount,
        gross_tax,
        audit_step,
    }
}
