use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dividend income received, relative to a reference date.
///
/// Amounts are summed as recorded, without currency conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendSummary {
    /// Received in the reference month
    pub month_total: Decimal,
    /// Received in the reference year
    pub year_total: Decimal,
    /// Reference year totals keyed by `YYYY-MM`
    pub by_month: BTreeMap<String, Decimal>,
    /// Reference year totals keyed by ticker
    pub by_ticker: BTreeMap<String, Decimal>,
    /// All-time totals keyed by currency code
    pub by_currency: BTreeMap<String, Decimal>,
    /// All-time totals keyed by `YYYY-MM`, months without income omitted
    pub monthly_series: BTreeMap<String, Decimal>,
    pub total_received: Decimal,
    pub event_count: usize,
    /// Mean of the most recent months with income
    pub avg_monthly: Decimal,
    /// `avg_monthly` over a full year
    pub projected_annual: Decimal,
}
