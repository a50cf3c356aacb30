use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fx::{CurrencyDisplay, ExchangeRate};
use crate::holdings::WatchlistEntry;
use crate::portfolio::allocation::{AllocationResult, SectorAllocation};
use crate::portfolio::goals::GoalsSummary;
use crate::portfolio::income::DividendSummary;
use crate::portfolio::net_worth::{Patrimony, PatrimonyEvolution};
use crate::portfolio::positions::{EquityRow, FixedIncomeRow, IncomeFundRow, PositionView};
use crate::portfolio::watchlist::WatchlistCounts;

/// Everything derived from a snapshot. Never persisted, never patched:
/// each recompute produces a fresh value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPortfolio {
    pub as_of: NaiveDate,
    pub exchange_rate: ExchangeRate,
    pub currency_display: CurrencyDisplay,

    pub equities: PositionView<EquityRow>,
    /// Amounts in USD; `marketValueDomestic` carries the converted value
    pub intl_equities: PositionView<EquityRow>,
    pub income_funds: PositionView<IncomeFundRow>,
    pub fixed_income: PositionView<FixedIncomeRow>,
    pub equity_sectors: Vec<SectorAllocation>,
    /// Sector breakdown of international positions, in USD
    pub intl_sectors: Vec<SectorAllocation>,

    pub allocation: AllocationResult,
    pub patrimony: Patrimony,
    pub patrimony_evolution: PatrimonyEvolution,
    pub dividends: DividendSummary,
    pub watchlist_alerts: Vec<WatchlistEntry>,
    pub watchlist_counts: WatchlistCounts,
    pub goals: GoalsSummary,
}

impl DerivedPortfolio {
    pub fn total_patrimony(&self) -> rust_decimal::Decimal {
        self.patrimony.total
    }
}
