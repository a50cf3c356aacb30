//! Valuation module - fair-value estimates, price classification and returns.
//!
//! Every function here is pure: insufficient inputs yield `None` or zero,
//! never an error.

mod classification;
mod fair_value;
mod returns;

#[cfg(test)]
mod valuation_tests;

pub use classification::{discount_premium, IndicatorThresholds, PriceIndicator};
pub use fair_value::{
    bazin_fair_price, fair_price, fair_value_breakdown, graham_fair_price, FairValueBreakdown,
    FairValueSource,
};
pub use returns::{fx_adjusted_return_pct, profit_loss, return_pct, yield_on_cost};
