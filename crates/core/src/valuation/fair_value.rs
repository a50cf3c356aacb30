use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::constants::{BAZIN_HISTORY_YEARS, BAZIN_REQUIRED_YIELD, GRAHAM_MULTIPLIER};
use crate::holdings::{EquityPosition, SecurityType};

/// Graham number: `sqrt(22.5 × eps × bvps)`.
///
/// Returns `None` when either input is missing, zero or negative, or when
/// the product is too large to represent.
pub fn graham_fair_price(eps: Option<Decimal>, book_value_per_share: Option<Decimal>) -> Option<Decimal> {
    let eps = eps.filter(|v| *v > Decimal::ZERO)?;
    let bvps = book_value_per_share.filter(|v| *v > Decimal::ZERO)?;
    GRAHAM_MULTIPLIER.checked_mul(eps)?.checked_mul(bvps)?.sqrt()
}

/// Bazin fair price: mean annual dividend divided by the required 6% yield.
///
/// Only the most recent five entries of `history` (oldest first) are used.
/// Returns `None` for an empty history or an out-of-range result.
pub fn bazin_fair_price(history: &[Decimal]) -> Option<Decimal> {
    if history.is_empty() {
        return None;
    }
    let recent = &history[history.len().saturating_sub(BAZIN_HISTORY_YEARS)..];
    let sum = recent
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))?;
    let mean = sum.checked_div(Decimal::from(recent.len()))?;
    mean.checked_div(BAZIN_REQUIRED_YIELD)
}

/// Which estimate produced the effective fair price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FairValueSource {
    Manual,
    Graham,
    Bazin,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairValueBreakdown {
    pub graham: Option<Decimal>,
    pub bazin: Option<Decimal>,
    /// Conservative estimate: the lower of the positive model results
    pub calculated: Option<Decimal>,
    /// Manual override if present, otherwise `calculated`
    pub fair_price: Option<Decimal>,
    pub source: FairValueSource,
}

pub fn fair_value_breakdown(position: &EquityPosition) -> FairValueBreakdown {
    let (graham, bazin) = match position.security_type {
        SecurityType::Stock => (
            graham_fair_price(position.eps, position.book_value_per_share),
            bazin_fair_price(&position.dividend_history),
        ),
        SecurityType::Etf | SecurityType::Reit => (None, None),
    };

    let candidates = [
        (graham, FairValueSource::Graham),
        (bazin, FairValueSource::Bazin),
    ];
    let winner = candidates
        .iter()
        .filter_map(|(value, source)| value.filter(|v| *v > Decimal::ZERO).map(|v| (v, *source)))
        .min_by(|a, b| a.0.cmp(&b.0));
    let calculated = winner.map(|(value, _)| value);

    let manual = position.fair_price_override.filter(|v| *v >= Decimal::ZERO);
    let (fair_price, source) = match (manual, winner) {
        (Some(value), _) => (Some(value), FairValueSource::Manual),
        (None, Some((value, source))) => (Some(value), source),
        (None, None) => (None, FairValueSource::Unavailable),
    };

    FairValueBreakdown {
        graham,
        bazin,
        calculated,
        fair_price,
        source,
    }
}

/// Effective fair price of a position: the manual override when present,
/// otherwise the lower of the computable Graham/Bazin estimates.
pub fn fair_price(position: &EquityPosition) -> Option<Decimal> {
    fair_value_breakdown(position).fair_price
}
