//! Section 46 donation credit.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Share of taxable income that can count as eligible donations (30%).
pub const DONATION_INCOME_CEILING: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Credit rate on eligible donations (35%).
pub const DONATION_CREDIT_RATE: Decimal = Decimal::from_parts(35, 0, 0, false, 2);

/// The result of computing the donation credit, including the audit step.
#[derive(Debug, Clone)]
pub struct DonationCreditResult {
    /// Donations counted after the income ceiling.
    pub eligible_amount: Decimal,
    /// The credit.
    pub credit: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the donation credit for the declared donations.
///
/// Zero when no donation was stated, the amount is not positive, or taxable
/// income is not positive. Otherwise 35% of the donations, which count only
/// up to 30% of taxable income.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::donation_credit;
/// use rust_decimal::Decimal;
///
/// let income = Decimal::from(100_000);
/// assert_eq!(donation_credit(Some(Decimal::from(10_000)), income), Decimal::from(3_500));
/// assert_eq!(donation_credit(Some(Decimal::from(50_000)), income), Decimal::from(10_500));
/// assert_eq!(donation_credit(None, income), Decimal::ZERO);
/// ```
pub fn donation_credit(donations: Option<Decimal>, taxable_income: Decimal) -> Decimal {
    eligible_donations(donations, taxable_income) * DONATION_CREDIT_RATE
}

fn eligible_donations(donations: Option<Decimal>, taxable_income: Decimal) -> Decimal {
    match donations {
        Some(amount) if amount > Decimal::ZERO && taxable_income > Decimal::ZERO => {
            amount.min(DONATION_INCOME_CEILING * taxable_income)
        }
        _ => Decimal::ZERO,
    }
}

/// Computes the donation credit and records it in the audit trail.
pub fn calculate_donation_credit(
    donations: Option<Decimal>,
    taxable_income: Decimal,
    step_number: u32,
) -> DonationCreditResult {
    let eligible_amount = eligible_donations(donations, taxable_income);
    let credit = eligible_amount * DONATION_CREDIT_RATE;

    let reasoning = match donations {
        None => "No donations stated - no donation credit".to_string(),
        Some(_) if eligible_amount.is_zero() => {
            "Donations or taxable income not positive - no donation credit".to_string()
        }
        Some(amount) if eligible_amount < amount => format!(
            "Donations {} capped at 30% of income ({}) x 35% = {}",
            amount.normalize(),
            eligible_amount.normalize(),
            credit.normalize()
        ),
        Some(amount) => format!(
            "Donations {} x 35% = {}",
            amount.normalize(),
            credit.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "donation_credit".to_string(),
        rule_name: "Section 46 Donation Credit".to_string(),
        input: serde_json::json!({
            "donations": donations.map(|d| d.normalize().to_string()),
            "taxable_income": taxable_income.normalize().to_string()
        }),
        output: serde_json::json!({
            "eligible_amount": eligible_amount.normalize().to_string(),
            "credit": credit.normalize().to_string()
        }),
        reasoning,
    };

    DonationCreditResult {
        eligible_amount,
        credit,
        audit_step,
    }
}
