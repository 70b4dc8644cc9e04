//! Result breakdown lines.
//!
//! Titles and explanations live in one table so the five-line layout can be
//! audited in one place; only the amounts are computed.

use rust_decimal::Decimal;

use crate::models::{BreakdownItem, BreakdownKey};

use super::format_points;

/// Placeholder replaced by the formatted credit point total.
const POINTS_PLACEHOLDER: &str = "{points}";

/// One row of the breakdown table.
struct BreakdownRow {
    key: BreakdownKey,
    title: &'static str,
    explanation: &'static str,
}

const BREAKDOWN_ROWS: [BreakdownRow; 5] = [
    BreakdownRow {
        key: BreakdownKey::GrossTax,
        title: "Tax by brackets",
        explanation: "Tax computed from the bracket schedule of the selected tax year, plus surtax above the threshold.",
    },
    BreakdownRow {
        key: BreakdownKey::CreditPoints,
        title: "Credit points",
        explanation: "Credit points ({points}) x annual credit point value.",
    },
    BreakdownRow {
        key: BreakdownKey::Donation,
        title: "Section 46 donation credit",
        explanation: "35% of eligible donations (up to 30% of taxable income).",
    },
    BreakdownRow {
        key: BreakdownKey::Liability,
        title: "Annual tax liability",
        explanation: "Gross tax less credits.",
    },
    BreakdownRow {
        key: BreakdownKey::Withheld,
        title: "Tax withheld at source",
        explanation: "Total tax withheld by the employer(s).",
    },
];

/// Amounts feeding the breakdown, all non-negative.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownAmounts {
    /// Bracket tax plus surtax.
    pub gross_tax: Decimal,
    /// Credit point total used.
    pub credit_points: Decimal,
    /// Value of those points.
    pub credit_points_value: Decimal,
    /// Donation credit.
    pub donation_credit: Decimal,
    /// Net liability.
    pub liability: Decimal,
    /// Total withheld.
    pub withheld: Decimal,
}

/// Negates an amount without producing a negative zero.
fn reduction(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        Decimal::ZERO
    } else {
        -amount
    }
}

/// Builds the five breakdown lines in fixed order.
///
/// Reductions (credit points, donation) and the withholding offset are
/// negated; gross tax and liability are positive.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::{build_breakdown, BreakdownAmounts};
/// use refund_estimator::models::BreakdownKey;
/// use rust_decimal::Decimal;
///
/// let items = build_breakdown(&BreakdownAmounts {
///     gross_tax: Decimal::from(6_000),
///     credit_points: Decimal::new(225, 2),
///     credit_points_value: Decimal::from(6_534),
///     donation_credit: Decimal::ZERO,
///     liability: Decimal::ZERO,
///     withheld: Decimal::from(5_500),
/// });
/// assert_eq!(items.len(), 5);
/// assert_eq!(items[1].key, BreakdownKey::CreditPoints);
/// assert_eq!(items[1].amount, Decimal::from(-6_534));
/// ```
pub fn build_breakdown(amounts: &BreakdownAmounts) -> Vec<BreakdownItem> {
    let points = format_points(amounts.credit_points);

    BREAKDOWN_ROWS
        .iter()
        .map(|row| {
            let amount = match row.key {
                BreakdownKey::GrossTax => amounts.gross_tax,
                BreakdownKey::CreditPoints => reduction(amounts.credit_points_value),
                BreakdownKey::Donation => reduction(amounts.donation_credit),
                BreakdownKey::Liability => amounts.liability,
                BreakdownKey::Withheld => reduction(amounts.withheld),
            };
            BreakdownItem {
                key: row.key,
                title: row.title.to_string(),
                amount,
                explanation: row.explanation.replace(POINTS_PLACEHOLDER, &points),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> BreakdownAmounts {
        BreakdownAmounts {
            gross_tax: dec("10635.2"),
            credit_points: dec("2.25"),
            credit_points_value: dec("6534"),
            donation_credit: dec("3500"),
            liability: dec("601.2"),
            withheld: dec("10000"),
        }
    }

    #[test]
    fn test_rows_follow_key_order() {
        let keys: Vec<BreakdownKey> = BREAKDOWN_ROWS.iter().map(|r| r.key).collect();
        assert_eq!(keys, BreakdownKey::ALL.to_vec());
    }

    #[test]
    fn test_signs() {
        let items = build_breakdown(&sample());
        assert_eq!(items[0].amount, dec("10635.2"));
        assert_eq!(items[1].amount, dec("-6534"));
        assert_eq!(items[2].amount, dec("-3500"));
        assert_eq!(items[3].amount, dec("601.2"));
        assert_eq!(items[4].amount, dec("-10000"));
    }

    #[test]
    fn test_points_embedded_in_explanation() {
        let items = build_breakdown(&sample());
        assert_eq!(
            items[1].explanation,
            "Credit points (2.25) x annual credit point value."
        );
        assert!(!items.iter().any(|i| i.explanation.contains(POINTS_PLACEHOLDER)));
    }

    #[test]
    fn test_zero_donation_line_still_present() {
        let mut amounts = sample();
        amounts.donation_credit = Decimal::ZERO;
        let items = build_breakdown(&amounts);
        assert_eq!(items[2].key, BreakdownKey::Donation);
        assert!(items[2].amount.is_zero());
        assert!(!items[2].amount.is_sign_negative());
    }
}
