//! Flat surtax above a yearly threshold.

use rust_decimal::Decimal;

/// Computes the flat surtax on income above `threshold`.
///
/// The surtax is added on top of bracket tax rather than acting as another
/// bracket.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::surtax;
/// use rust_decimal::Decimal;
///
/// let rate = Decimal::new(3, 2);
/// assert_eq!(surtax(Decimal::from(700_000), Decimal::from(721_560), rate), Decimal::ZERO);
/// assert_eq!(surtax(Decimal::from(821_560), Decimal::from(721_560), rate), Decimal::from(3_000));
/// ```
pub fn surtax(income: Decimal, threshold: Decimal, rate: Decimal) -> Decimal {
    if income <= threshold {
        return Decimal::ZERO;
    }
    (income - threshold) * rate
}
