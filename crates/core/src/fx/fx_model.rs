use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_EXCHANGE_RATE, MAX_EXCHANGE_RATE};
use crate::errors::{Error, Result};
use crate::utils::product;

/// Currency a position is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Domestic currency (Brazilian real)
    #[default]
    Brl,
    /// Foreign currency (US dollar)
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Currency in which presentation values are shown.
///
/// Only affects formatting of totals; stored values are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyDisplay {
    #[default]
    #[serde(alias = "BRL", alias = "domestic")]
    Domestic,
    #[serde(alias = "USD", alias = "foreign")]
    Foreign,
}

impl CurrencyDisplay {
    pub fn currency(&self) -> Currency {
        match self {
            CurrencyDisplay::Domestic => Currency::Brl,
            CurrencyDisplay::Foreign => Currency::Usd,
        }
    }
}

/// USD -> BRL exchange rate. Always in `(0, MAX_EXCHANGE_RATE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    /// Creates a rate, rejecting zero, negative and implausibly large values.
    pub fn new(rate: Decimal) -> Result<Self> {
        if rate <= Decimal::ZERO {
            return Err(Error::InvalidExchangeRate(format!(
                "rate must be positive, got {}",
                rate
            )));
        }
        if rate > MAX_EXCHANGE_RATE {
            return Err(Error::InvalidExchangeRate(format!(
                "rate must not exceed {}, got {}",
                MAX_EXCHANGE_RATE, rate
            )));
        }
        Ok(ExchangeRate(rate))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Expresses an amount denominated in `currency` in the domestic currency.
    pub fn to_domestic(&self, amount: Decimal, currency: Currency) -> Decimal {
        match currency {
            Currency::Brl => amount,
            Currency::Usd => product(amount, self.0),
        }
    }

    /// Expresses a domestic amount in foreign currency.
    pub fn to_foreign(&self, amount: Decimal) -> Decimal {
        amount.checked_div(self.0).unwrap_or(if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate(DEFAULT_EXCHANGE_RATE)
    }
}

impl TryFrom<Decimal> for ExchangeRate {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        ExchangeRate::new(value)
    }
}

impl From<ExchangeRate> for Decimal {
    fn from(rate: ExchangeRate) -> Self {
        rate.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts a domestic amount into the currency selected for display.
pub fn present_amount(domestic_amount: Decimal, display: CurrencyDisplay, rate: ExchangeRate) -> Decimal {
    match display {
        CurrencyDisplay::Domestic => domestic_amount,
        CurrencyDisplay::Foreign => rate.to_foreign(domestic_amount),
    }
}
