//! Holdings domain models.
//!
//! These are the only mutable records of the engine. Everything else
//! (fair prices, returns, allocation, summaries) is derived from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::collection::{normalize_key, Record};
use super::decimal_input::{self, clamp_amount, clamp_optional_amount, clamp_signed};
use crate::fx::Currency;
use crate::portfolio::allocation::AssetClass;
use crate::utils::product;

/// Kind of listed security. Fundamental valuation models only apply to stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityType {
    #[default]
    #[serde(alias = "Stock")]
    Stock,
    #[serde(alias = "Etf")]
    Etf,
    #[serde(alias = "Reit")]
    Reit,
}

/// A domestic or international stock/ETF position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPosition {
    /// Unique key within its collection
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(
        default,
        alias = "qty",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub quantity: Decimal,
    #[serde(
        default,
        alias = "avgPrice",
        alias = "avgPriceUsd",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub average_cost: Decimal,
    #[serde(
        default,
        alias = "currentPriceUsd",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub current_price: Decimal,
    /// Earnings per share
    #[serde(
        default,
        alias = "lpa",
        serialize_with = "rust_decimal::serde::str_option::serialize",
        deserialize_with = "decimal_input::optional"
    )]
    pub eps: Option<Decimal>,
    #[serde(
        default,
        alias = "vpa",
        serialize_with = "rust_decimal::serde::str_option::serialize",
        deserialize_with = "decimal_input::optional"
    )]
    pub book_value_per_share: Option<Decimal>,
    /// Trailing annual dividends per share, oldest first
    #[serde(
        default,
        alias = "dividends5y",
        serialize_with = "decimal_input::serialize_list",
        deserialize_with = "decimal_input::non_negative_list"
    )]
    pub dividend_history: Vec<Decimal>,
    #[serde(
        default,
        alias = "fairPriceManual",
        serialize_with = "rust_decimal::serde::str_option::serialize",
        deserialize_with = "decimal_input::optional_non_negative"
    )]
    pub fair_price_override: Option<Decimal>,
    #[serde(default)]
    pub broker: String,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default, alias = "type")]
    pub security_type: SecurityType,
}

impl EquityPosition {
    pub fn new(ticker: &str, quantity: Decimal, average_cost: Decimal, current_price: Decimal) -> Self {
        EquityPosition {
            ticker: ticker.to_string(),
            quantity,
            average_cost,
            current_price,
            ..Default::default()
        }
    }

    /// Market value in the position's own currency.
    pub fn market_value(&self) -> Decimal {
        product(self.quantity, self.current_price)
    }

    /// Amount invested in the position's own currency.
    pub fn cost_basis(&self) -> Decimal {
        product(self.quantity, self.average_cost)
    }
}

impl Record for EquityPosition {
    fn key(&self) -> &str {
        &self.ticker
    }

    fn sanitize(mut self) -> Self {
        self.ticker = normalize_ticker(&self.ticker);
        self.name = self.name.trim().to_string();
        self.sector = self.sector.trim().to_string();
        self.broker = self.broker.trim().to_string();
        self.quantity = clamp_amount(self.quantity);
        self.average_cost = clamp_amount(self.average_cost);
        self.current_price = clamp_amount(self.current_price);
        self.dividend_history = self
            .dividend_history
            .into_iter()
            .map(clamp_amount)
            .collect();
        self.eps = self.eps.map(clamp_signed);
        self.book_value_per_share = self.book_value_per_share.map(clamp_signed);
        self.fair_price_override = clamp_optional_amount(self.fair_price_override);
        self
    }
}

/// A real-estate income fund position (REIT-like).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeFundPosition {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(
        default,
        alias = "qty",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub quantity: Decimal,
    #[serde(
        default,
        alias = "avgPrice",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub average_cost: Decimal,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub current_price: Decimal,
    #[serde(
        default,
        alias = "pvp",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub price_to_book: Decimal,
    /// Trailing twelve-month yield, in percent
    #[serde(
        default,
        alias = "dy12m",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub dividend_yield_12m: Decimal,
    #[serde(
        default,
        alias = "lastDividend",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub last_distribution: Decimal,
    #[serde(default)]
    pub broker: String,
}

impl IncomeFundPosition {
    pub fn new(ticker: &str, quantity: Decimal, average_cost: Decimal, current_price: Decimal) -> Self {
        IncomeFundPosition {
            ticker: ticker.to_string(),
            quantity,
            average_cost,
            current_price,
            ..Default::default()
        }
    }

    pub fn market_value(&self) -> Decimal {
        product(self.quantity, self.current_price)
    }

    pub fn cost_basis(&self) -> Decimal {
        product(self.quantity, self.average_cost)
    }
}

impl Record for IncomeFundPosition {
    fn key(&self) -> &str {
        &self.ticker
    }

    fn sanitize(mut self) -> Self {
        self.ticker = normalize_ticker(&self.ticker);
        self.name = self.name.trim().to_string();
        self.sector = self.sector.trim().to_string();
        self.broker = self.broker.trim().to_string();
        self.quantity = clamp_amount(self.quantity);
        self.average_cost = clamp_amount(self.average_cost);
        self.current_price = clamp_amount(self.current_price);
        self.price_to_book = clamp_amount(self.price_to_book);
        self.dividend_yield_12m = clamp_amount(self.dividend_yield_12m);
        self.last_distribution = clamp_amount(self.last_distribution);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    #[default]
    #[serde(alias = "Tesouro Direto")]
    Treasury,
    Cdb,
    Lci,
    Lca,
    Debenture,
    Cri,
    Cra,
}

/// A fixed-income holding valued by its reported current value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedIncomeHolding {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "type")]
    pub instrument_type: InstrumentType,
    /// Free-text rate descriptor, e.g. "IPCA + 6.20%"
    #[serde(default)]
    pub rate: String,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub applied_value: Decimal,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub current_value: Decimal,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,
    #[serde(default)]
    pub broker: String,
}

impl Record for FixedIncomeHolding {
    fn key(&self) -> &str {
        &self.id
    }

    fn sanitize(mut self) -> Self {
        self.id = self.id.trim().to_string();
        self.title = self.title.trim().to_string();
        self.broker = self.broker.trim().to_string();
        self.applied_value = clamp_amount(self.applied_value);
        self.current_value = clamp_amount(self.current_value);
        self
    }

    fn ensure_key(&mut self) {
        assign_generated_id(&mut self.id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RealAssetType {
    #[serde(alias = "Imóvel")]
    Property,
    #[serde(alias = "Veículo")]
    Vehicle,
    #[default]
    Other,
}

/// A non-financial asset (property, vehicle) tracked by estimated value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealAsset {
    #[serde(default)]
    pub id: String,
    pub description: String,
    #[serde(default, alias = "type")]
    pub asset_type: RealAssetType,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub estimated_value: Decimal,
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
    /// Whether the asset counts toward total patrimony
    #[serde(default)]
    pub include_in_total: bool,
}

impl Record for RealAsset {
    fn key(&self) -> &str {
        &self.id
    }

    fn sanitize(mut self) -> Self {
        self.id = self.id.trim().to_string();
        self.description = self.description.trim().to_string();
        self.estimated_value = clamp_amount(self.estimated_value);
        self
    }

    fn ensure_key(&mut self) {
        assign_generated_id(&mut self.id);
    }
}

/// A dividend, interest-on-equity or fund distribution received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendEvent {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    pub ticker: String,
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub value: Decimal,
    #[serde(default)]
    pub currency: Currency,
}

impl Record for DividendEvent {
    fn key(&self) -> &str {
        &self.id
    }

    fn sanitize(mut self) -> Self {
        self.id = self.id.trim().to_string();
        self.ticker = normalize_ticker(&self.ticker);
        self.kind = self
            .kind
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self.value = clamp_amount(self.value);
        self
    }

    fn ensure_key(&mut self) {
        assign_generated_id(&mut self.id);
    }

    fn is_complete(&self) -> bool {
        !self.ticker.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WatchlistStatus {
    #[default]
    #[serde(alias = "Interesse")]
    Interested,
    #[serde(alias = "Possui")]
    Owned,
}

/// A tracked asset with a user-defined entry price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub current_price: Decimal,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str_option::serialize",
        deserialize_with = "decimal_input::optional_non_negative"
    )]
    pub fair_price: Option<Decimal>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub target_price: Decimal,
    #[serde(default)]
    pub status: WatchlistStatus,
}

impl Record for WatchlistEntry {
    fn key(&self) -> &str {
        &self.ticker
    }

    fn sanitize(mut self) -> Self {
        self.ticker = normalize_ticker(&self.ticker);
        self.name = self.name.trim().to_string();
        self.sector = self.sector.trim().to_string();
        self.current_price = clamp_amount(self.current_price);
        self.fair_price = clamp_optional_amount(self.fair_price);
        self.target_price = clamp_amount(self.target_price);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    /// Target expressed as a share of the financial portfolio (0-100)
    #[default]
    Percentage,
    /// Target expressed as an absolute domestic amount
    Value,
}

/// Desired weight of an asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationTarget {
    #[serde(alias = "class")]
    pub asset_class: AssetClass,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub target: Decimal,
    #[serde(default)]
    pub target_type: TargetType,
}

impl Record for AllocationTarget {
    fn key(&self) -> &str {
        self.asset_class.code()
    }

    fn sanitize(mut self) -> Self {
        self.target = clamp_amount(self.target);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalTargetType {
    #[default]
    #[serde(alias = "qty")]
    Quantity,
    #[serde(alias = "value")]
    Value,
}

/// Target holding size for a ticker, by share count or by market value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulationGoal {
    #[serde(default)]
    pub id: String,
    pub ticker: String,
    #[serde(default)]
    pub target_type: GoalTargetType,
    #[serde(
        default,
        alias = "targetQty",
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub target_quantity: Decimal,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub target_value: Decimal,
    #[serde(default)]
    pub note: String,
}

impl Record for AccumulationGoal {
    fn key(&self) -> &str {
        &self.id
    }

    fn sanitize(mut self) -> Self {
        self.id = self.id.trim().to_string();
        self.ticker = normalize_ticker(&self.ticker);
        self.note = self.note.trim().to_string();
        self.target_quantity = clamp_amount(self.target_quantity);
        self.target_value = clamp_amount(self.target_value);
        self
    }

    fn ensure_key(&mut self) {
        assign_generated_id(&mut self.id);
    }

    fn is_complete(&self) -> bool {
        !self.ticker.is_empty()
    }
}

/// Month-end total of the portfolio, supplied externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatrimonyPoint {
    /// Display label of the month, e.g. "Jan/26"
    pub month: String,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "decimal_input::non_negative"
    )]
    pub total: Decimal,
}

/// The persisted state: every mutable collection, verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub equities: Vec<EquityPosition>,
    pub income_funds: Vec<IncomeFundPosition>,
    pub intl_equities: Vec<EquityPosition>,
    pub fixed_income: Vec<FixedIncomeHolding>,
    pub real_assets: Vec<RealAsset>,
    pub dividends: Vec<DividendEvent>,
    pub watchlist: Vec<WatchlistEntry>,
    #[serde(default)]
    pub allocation_targets: Vec<AllocationTarget>,
    #[serde(default)]
    pub accumulation_goals: Vec<AccumulationGoal>,
    /// Supplied monthly totals. Never persisted; always taken from the seed.
    #[serde(skip)]
    pub patrimonial_history: Vec<PatrimonyPoint>,
}

impl PortfolioSnapshot {
    /// Pins the denomination of each equity collection: domestic positions
    /// are BRL, international positions are USD.
    pub fn normalize_currencies(&mut self) {
        for position in &mut self.equities {
            position.currency = Currency::Brl;
        }
        for position in &mut self.intl_equities {
            position.currency = Currency::Usd;
        }
    }
}

/// Identifies one of the persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionKind {
    Equities,
    IncomeFunds,
    IntlEquities,
    FixedIncome,
    RealAssets,
    Dividends,
    Watchlist,
    AllocationTargets,
    AccumulationGoals,
}

impl CollectionKind {
    /// Key of the collection inside the persisted snapshot object.
    pub fn storage_key(&self) -> &'static str {
        match self {
            CollectionKind::Equities => "equities",
            CollectionKind::IncomeFunds => "incomeFunds",
            CollectionKind::IntlEquities => "intlEquities",
            CollectionKind::FixedIncome => "fixedIncome",
            CollectionKind::RealAssets => "realAssets",
            CollectionKind::Dividends => "dividends",
            CollectionKind::Watchlist => "watchlist",
            CollectionKind::AllocationTargets => "allocationTargets",
            CollectionKind::AccumulationGoals => "accumulationGoals",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

fn normalize_ticker(ticker: &str) -> String {
    normalize_key(ticker)
}

fn assign_generated_id(id: &mut String) {
    if id.trim().is_empty() {
        *id = uuid::Uuid::new_v4().to_string();
    }
}
