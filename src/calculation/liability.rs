//! Liability, refund and underpayment.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of settling liability against withholding.
#[derive(Debug, Clone)]
pub struct LiabilityResult {
    /// Gross tax less credits, floored at zero.
    pub liability: Decimal,
    /// Withholding in excess of liability.
    pub refund: Decimal,
    /// Liability in excess of withholding.
    pub underpayment: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Settles the year's liability against the tax already withheld.
///
/// Credits cannot push liability below zero. At most one of `refund` and
/// `underpayment` is non-zero; both are zero when withholding equals
/// liability exactly.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::calculate_liability;
/// use rust_decimal::Decimal;
///
/// let result = calculate_liability(
///     Decimal::from(6_000),
///     Decimal::from(6_534),
///     Decimal::ZERO,
///     Decimal::from(5_500),
///     1,
/// );
/// assert_eq!(result.liability, Decimal::ZERO);
/// assert_eq!(result.refund, Decimal::from(5_500));
/// assert_eq!(result.underpayment, Decimal::ZERO);
/// ```
pub fn calculate_liability(
    gross_tax: Decimal,
    credit_points_value: Decimal,
    donation_credit: Decimal,
    withheld: Decimal,
    step_number: u32,
) -> LiabilityResult {
    let net = gross_tax - credit_points_value - donation_credit;
    let liability = net.max(Decimal::ZERO);
    let refund = (withheld - liability).max(Decimal::ZERO);
    let underpayment = (liability - withheld).max(Decimal::ZERO);

    let mut reasoning = format!(
        "Liability = max(0, {} - {} - {}) = {}",
        gross_tax.normalize(),
        credit_points_value.normalize(),
        donation_credit.normalize(),
        liability.normalize()
    );
    if refund > Decimal::ZERO {
        reasoning.push_str(&format!(
            "; withheld {} exceeds liability, refund {}",
            withheld.normalize(),
            refund.normalize()
        ));
    } else if underpayment > Decimal::ZERO {
        reasoning.push_str(&format!(
            "; liability exceeds withheld {}, underpayment {}",
            withheld.normalize(),
            underpayment.normalize()
        ));
    } else {
        reasoning.push_str("; withheld equals liability");
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "liability".to_string(),
        rule_name: "Liability and Refund".to_string(),
        input: serde_json::json!({
            "gross_tax": gross_tax.normalize().to_string(),
            "credit_points_value": credit_points_value.normalize().to_string(),
            "donation_credit": donation_credit.normalize().to_string(),
            "withheld": withheld.normalize().to_string()
        }),
        output: serde_json::json!({
            "liability": liability.normalize().to_string(),
            "refund": refund.normalize().to_string(),
            "underpayment": underpayment.normalize().to_string(),
            "floored": net < Decimal::ZERO
        }),
        reasoning,
    };

    LiabilityResult {
        liability,
        refund,
        underpayment,
        audit_step,
    }
}
