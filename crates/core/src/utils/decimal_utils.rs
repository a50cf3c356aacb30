//! Overflow-safe arithmetic for derived figures.
//!
//! Inputs are capped at `MAX_AMOUNT` on the way in, but the calculators are
//! also public and may see arbitrary values. Products and sums saturate at
//! `Decimal::MAX`; ratios that cannot be represented yield `None`.

use log::warn;
use rust_decimal::Decimal;

/// `a × b`, saturating at the Decimal bounds.
pub fn product(a: Decimal, b: Decimal) -> Decimal {
    a.saturating_mul(b)
}

/// Sum of `values`, saturating at the Decimal bounds.
pub fn total<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

/// `numerator / denominator × 100`.
///
/// `None` when the denominator is zero or the ratio overflows.
pub fn percent_of(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    let pct = numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
    if pct.is_none() {
        warn!(
            "Percentage of {} over {} is out of range, treating as unavailable",
            numerator, denominator
        );
    }
    pct
}
