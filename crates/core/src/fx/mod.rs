//! FX module - currency denominations, the configured exchange rate and
//! presentation conversion.

mod fx_model;

#[cfg(test)]
mod fx_model_tests;

pub use fx_model::{present_amount, Currency, CurrencyDisplay, ExchangeRate};
