//! Locale formatting for amounts and credit points in display text.
//!
//! Amounts follow the he-IL convention: `,` groups thousands, `.` is the
//! decimal point, and at most three fraction digits are shown.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency suffix appended to formatted amounts.
pub const CURRENCY_SYMBOL: &str = "₪";

const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats a number with thousands separators and up to three decimals.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::format_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_number(Decimal::from(1_234_567)), "1,234,567");
/// assert_eq!(format_number(Decimal::new(106352, 1)), "10,635.2");
/// ```
pub fn format_number(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats a currency amount, e.g. `5,500 ₪`.
pub fn format_amount(value: Decimal) -> String {
    format!("{} {}", format_number(value), CURRENCY_SYMBOL)
}

/// Formats a credit point total with exactly two decimals.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::format_points;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_points(Decimal::new(375, 2)), "3.75");
/// assert_eq!(format_points(Decimal::ZERO), "0.00");
/// ```
pub fn format_points(points: Decimal) -> String {
    let mut rounded = points.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
