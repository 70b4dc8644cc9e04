//! Progressive bracket tax.

use rust_decimal::Decimal;

use crate::config::TaxBracket;

/// Computes income tax across a progressive bracket schedule.
///
/// Each bracket taxes the band between the previous upper limit and its own
/// upper limit (or the income, whichever is lower) at its rate. The walk
/// stops at the first bracket containing the income; the unbounded top
/// bracket always terminates it.
///
/// Income must already be non-negative.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::tax_by_brackets;
/// use refund_estimator::config::ParameterTable;
/// use rust_decimal::Decimal;
///
/// let table = ParameterTable::builtin();
/// let brackets = &table.get(2024).unwrap().brackets;
///
/// // 84,120 × 10% + 15,880 × 14%
/// let tax = tax_by_brackets(Decimal::from(100_000), brackets);
/// assert_eq!(tax, Decimal::new(106352, 1));
/// ```
pub fn tax_by_brackets(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in brackets {
        let ceiling = match bracket.upper_limit {
            Some(limit) => income.min(limit),
            None => income,
        };
        let band = ceiling - previous_limit;
        if band <= Decimal::ZERO {
            break;
        }
        tax += band * bracket.rate;

        match bracket.upper_limit {
            Some(limit) if income > limit => previous_limit = limit,
            _ => break,
        }
    }

    tax
}
