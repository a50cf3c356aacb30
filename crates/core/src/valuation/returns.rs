use rust_decimal::Decimal;

use crate::utils::{percent_of, product};

/// Percentage return of `current_price` over `average_cost`; 0 when the cost is 0.
pub fn return_pct(current_price: Decimal, average_cost: Decimal) -> Decimal {
    current_price
        .checked_sub(average_cost)
        .and_then(|gain| percent_of(gain, average_cost))
        .unwrap_or(Decimal::ZERO)
}

pub fn profit_loss(quantity: Decimal, current_price: Decimal, average_cost: Decimal) -> Decimal {
    product(quantity, current_price).saturating_sub(product(quantity, average_cost))
}

/// Annual income per share as a percentage of the average cost.
pub fn yield_on_cost(annual_income_per_share: Decimal, average_cost: Decimal) -> Decimal {
    percent_of(annual_income_per_share, average_cost).unwrap_or(Decimal::ZERO)
}

/// Compounds a foreign-currency return with the currency's own move.
///
/// Historical rates are not tracked, so callers pass 0 for `fx_change_pct`
/// and the domestic return of a foreign position equals its USD return.
pub fn fx_adjusted_return_pct(foreign_return_pct: Decimal, fx_change_pct: Decimal) -> Decimal {
    if fx_change_pct.is_zero() {
        return foreign_return_pct;
    }
    let growth = |pct: Decimal| Decimal::ONE.checked_add(pct.checked_div(Decimal::ONE_HUNDRED)?);
    growth(foreign_return_pct)
        .zip(growth(fx_change_pct))
        .and_then(|(a, b)| a.checked_mul(b))
        .and_then(|g| g.checked_sub(Decimal::ONE))
        .and_then(|g| g.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(foreign_return_pct)
}
