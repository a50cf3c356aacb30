use serde::{Deserialize, Serialize};

use crate::fx::{CurrencyDisplay, ExchangeRate};
use crate::valuation::IndicatorThresholds;

/// Restricts enriched position rows to a single broker.
///
/// Serialized as an optional broker name; `null`, blank, `"All"` and
/// `"Todas"` all mean no filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum BrokerFilter {
    #[default]
    All,
    Only(String),
}

impl BrokerFilter {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("todas")
        {
            BrokerFilter::All
        } else {
            BrokerFilter::Only(trimmed.to_string())
        }
    }

    /// Whether a row held at `broker` passes the filter. Case-insensitive.
    pub fn matches(&self, broker: &str) -> bool {
        match self {
            BrokerFilter::All => true,
            BrokerFilter::Only(name) => name.eq_ignore_ascii_case(broker.trim()),
        }
    }
}

impl From<Option<String>> for BrokerFilter {
    fn from(value: Option<String>) -> Self {
        value.map(|v| BrokerFilter::parse(&v)).unwrap_or_default()
    }
}

impl From<BrokerFilter> for Option<String> {
    fn from(filter: BrokerFilter) -> Self {
        match filter {
            BrokerFilter::All => None,
            BrokerFilter::Only(name) => Some(name),
        }
    }
}

/// Options that shape the derived layer but are not part of the holdings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioSettings {
    pub exchange_rate: ExchangeRate,
    pub currency_display: CurrencyDisplay,
    pub broker_filter: BrokerFilter,
    pub indicator_thresholds: IndicatorThresholds,
}
