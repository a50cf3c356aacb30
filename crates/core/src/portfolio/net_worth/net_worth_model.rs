use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::PatrimonyPoint;

/// Net worth split into financial holdings and included real assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patrimony {
    /// Allocation grand total
    pub financial: Decimal,
    /// Real assets flagged for inclusion
    pub real_assets: Decimal,
    pub total: Decimal,
}

/// Change across the supplied monthly totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatrimonyEvolution {
    pub points: Vec<PatrimonyPoint>,
    pub first: Decimal,
    pub last: Decimal,
    pub change: Decimal,
    /// Zero when the first total is zero
    pub change_pct: Decimal,
}
