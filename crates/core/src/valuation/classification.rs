use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STRONG_DISCOUNT_PCT, DEFAULT_STRONG_PREMIUM_PCT};
use crate::errors::{Result, ValidationError};
use crate::utils::percent_of;

/// Percentage gap between market price and fair price.
///
/// Negative means discount, positive means premium. `None` when the fair
/// price is unknown or zero, or the gap is out of range.
pub fn discount_premium(current_price: Decimal, fair_price: Option<Decimal>) -> Option<Decimal> {
    let fair = fair_price.filter(|f| !f.is_zero())?;
    percent_of(current_price.checked_sub(fair)?, fair)
}

/// Visual signal derived from the discount/premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceIndicator {
    /// Trading at a strong discount
    Positive,
    /// Near fair value
    Warning,
    /// Trading at a strong premium
    Negative,
    /// Fair value unknown
    Neutral,
}

impl PriceIndicator {
    /// Classifies with the default ±15% band.
    pub fn from_discount_premium(discount_premium: Option<Decimal>) -> Self {
        IndicatorThresholds::default().classify(discount_premium)
    }
}

/// Boundaries of the "near fair value" band, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawThresholds")]
pub struct IndicatorThresholds {
    strong_discount_pct: Decimal,
    strong_premium_pct: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawThresholds {
    strong_discount_pct: Decimal,
    strong_premium_pct: Decimal,
}

impl TryFrom<RawThresholds> for IndicatorThresholds {
    type Error = crate::errors::Error;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        IndicatorThresholds::new(raw.strong_discount_pct, raw.strong_premium_pct)
    }
}

impl IndicatorThresholds {
    /// `strong_discount_pct` must be ≤ 0 and strictly below `strong_premium_pct`.
    pub fn new(strong_discount_pct: Decimal, strong_premium_pct: Decimal) -> Result<Self> {
        if strong_discount_pct > Decimal::ZERO || strong_discount_pct >= strong_premium_pct {
            return Err(ValidationError::InvalidInput(format!(
                "indicator thresholds must satisfy discount <= 0 and discount < premium, got {} / {}",
                strong_discount_pct, strong_premium_pct
            ))
            .into());
        }
        Ok(IndicatorThresholds {
            strong_discount_pct,
            strong_premium_pct,
        })
    }

    pub fn strong_discount_pct(&self) -> Decimal {
        self.strong_discount_pct
    }

    pub fn strong_premium_pct(&self) -> Decimal {
        self.strong_premium_pct
    }

    pub fn classify(&self, discount_premium: Option<Decimal>) -> PriceIndicator {
        match discount_premium {
            None => PriceIndicator::Neutral,
            Some(pct) if pct <= self.strong_discount_pct => PriceIndicator::Positive,
            Some(pct) if pct <= self.strong_premium_pct => PriceIndicator::Warning,
            Some(_) => PriceIndicator::Negative,
        }
    }
}

impl Default for IndicatorThresholds {
    fn default() -> Self {
        IndicatorThresholds {
            strong_discount_pct: DEFAULT_STRONG_DISCOUNT_PCT,
            strong_premium_pct: DEFAULT_STRONG_PREMIUM_PCT,
        }
    }
}
