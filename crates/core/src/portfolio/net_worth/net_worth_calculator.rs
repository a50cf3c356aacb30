use rust_decimal::Decimal;

use super::net_worth_model::{Patrimony, PatrimonyEvolution};
use crate::holdings::{PatrimonyPoint, RealAsset};
use crate::utils::total;
use crate::valuation::return_pct;

/// Financial total plus the estimated value of real assets marked for inclusion.
pub fn total_patrimony(financial_total: Decimal, real_assets: &[RealAsset]) -> Patrimony {
    let real_assets = total(
        real_assets
            .iter()
            .filter(|asset| asset.include_in_total)
            .map(|asset| asset.estimated_value),
    );
    Patrimony {
        financial: financial_total,
        real_assets,
        total: financial_total.saturating_add(real_assets),
    }
}

pub fn patrimony_evolution(points: &[PatrimonyPoint]) -> PatrimonyEvolution {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.total, last.total),
        _ => return PatrimonyEvolution::default(),
    };
    PatrimonyEvolution {
        points: points.to_vec(),
        first,
        last,
        change: last.saturating_sub(first),
        change_pct: return_pct(last, first),
    }
}
