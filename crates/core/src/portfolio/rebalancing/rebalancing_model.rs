use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::AssetClass;

/// Gap between an asset class and its target, in percentage points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeficit {
    pub asset_class: AssetClass,
    pub target_pct: Decimal,
    pub current_pct: Decimal,
    /// Positive when the class is below its target
    pub deficit_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSuggestion {
    pub asset_class: AssetClass,
    pub deficit_pct: Decimal,
    pub suggested_amount: Decimal,
    /// Share of the contribution (0-100)
    pub suggested_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionPlan {
    pub amount: Decimal,
    pub suggestions: Vec<ContributionSuggestion>,
}
