use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::Currency;
use crate::holdings::{InstrumentType, SecurityType};
use crate::valuation::{FairValueBreakdown, PriceIndicator};

/// Domestic or international equity row with its valuation.
///
/// Prices and amounts are in the position's own currency; the `*_domestic`
/// fields carry the converted figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityRow {
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub broker: String,
    pub currency: Currency,
    pub security_type: SecurityType,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub current_price: Decimal,
    pub cost: Decimal,
    pub market_value: Decimal,
    pub market_value_domestic: Decimal,
    pub fair_value: FairValueBreakdown,
    pub discount_premium: Option<Decimal>,
    pub indicator: PriceIndicator,
    pub return_pct: Decimal,
    /// Return in domestic currency. Equals `return_pct` for domestic rows.
    pub domestic_return_pct: Decimal,
    pub profit_loss: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeFundRow {
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub broker: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub current_price: Decimal,
    pub cost: Decimal,
    pub market_value: Decimal,
    pub return_pct: Decimal,
    pub profit_loss: Decimal,
    pub price_to_book: Decimal,
    pub dividend_yield_12m: Decimal,
    /// Last distribution annualized
    pub annual_income_per_share: Decimal,
    pub yield_on_cost: Decimal,
    /// Expected monthly income of the whole position
    pub monthly_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedIncomeRow {
    pub id: String,
    pub title: String,
    pub instrument_type: InstrumentType,
    pub rate: String,
    pub broker: String,
    pub applied_value: Decimal,
    pub current_value: Decimal,
    pub gain: Decimal,
    pub return_pct: Decimal,
    pub application_date: NaiveDate,
    pub maturity_date: Option<NaiveDate>,
    /// Negative once matured; `None` without a maturity date
    pub days_to_maturity: Option<i64>,
}

/// Aggregate figures of a position view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionTotals {
    pub cost: Decimal,
    pub market_value: Decimal,
    pub profit_loss: Decimal,
    pub return_pct: Decimal,
}

/// Rows of one view plus their totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionView<R> {
    pub rows: Vec<R>,
    pub totals: PositionTotals,
}

impl<R> Default for PositionView<R> {
    fn default() -> Self {
        PositionView {
            rows: Vec::new(),
            totals: PositionTotals::default(),
        }
    }
}
