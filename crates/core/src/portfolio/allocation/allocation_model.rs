//! Allocation models for the portfolio breakdown by asset class and sector.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset classes of the financial portfolio. Real assets are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    #[serde(alias = "RV Brasil")]
    DomesticEquities,
    #[serde(alias = "FIIs")]
    IncomeFunds,
    #[serde(alias = "RV Exterior")]
    InternationalEquities,
    #[serde(alias = "Renda Fixa")]
    FixedIncome,
}

impl AssetClass {
    /// All classes, in presentation order.
    pub const ALL: [AssetClass; 4] = [
        AssetClass::DomesticEquities,
        AssetClass::IncomeFunds,
        AssetClass::InternationalEquities,
        AssetClass::FixedIncome,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AssetClass::DomesticEquities => "DOMESTIC_EQUITIES",
            AssetClass::IncomeFunds => "INCOME_FUNDS",
            AssetClass::InternationalEquities => "INTERNATIONAL_EQUITIES",
            AssetClass::FixedIncome => "FIXED_INCOME",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::DomesticEquities => "Domestic Equities",
            AssetClass::IncomeFunds => "Income Funds",
            AssetClass::InternationalEquities => "International Equities",
            AssetClass::FixedIncome => "Fixed Income",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value and share of a single asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAllocation {
    pub asset_class: AssetClass,
    /// Total value in domestic currency
    pub value: Decimal,
    /// Percentage of the grand total (0-100)
    pub percentage: Decimal,
}

/// Value and share of a sector label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub sector: String,
    pub value: Decimal,
    /// Percentage of the breakdown total (0-100)
    pub percentage: Decimal,
}

/// Allocation of the financial portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    /// Grand total in domestic currency
    pub total: Decimal,
    /// One entry per asset class, in `AssetClass::ALL` order
    pub classes: Vec<ClassAllocation>,
    /// Domestic equities and income funds by sector, sorted by value descending
    pub sectors: Vec<SectorAllocation>,
}

impl AllocationResult {
    pub fn class(&self, asset_class: AssetClass) -> Option<&ClassAllocation> {
        self.classes.iter().find(|c| c.asset_class == asset_class)
    }

    /// Value of a class, zero when absent.
    pub fn value_of(&self, asset_class: AssetClass) -> Decimal {
        self.class(asset_class).map(|c| c.value).unwrap_or(Decimal::ZERO)
    }

    pub fn percentage_of(&self, asset_class: AssetClass) -> Decimal {
        self.class(asset_class)
            .map(|c| c.percentage)
            .unwrap_or(Decimal::ZERO)
    }
}
