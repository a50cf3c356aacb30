use rust_decimal::Decimal;

use super::rebalancing_model::{ClassDeficit, ContributionPlan, ContributionSuggestion};
use crate::constants::CONTRIBUTION_SPLIT_CLASSES;
use crate::holdings::{AllocationTarget, TargetType};
use crate::portfolio::allocation::{percentage, AllocationResult, AssetClass};
use crate::utils::{product, total};

/// Gap of each targeted class, largest deficit first.
///
/// Value targets are expressed as a share of the current grand total; their
/// deficit is floored at zero.
pub fn class_deficits(allocation: &AllocationResult, targets: &[AllocationTarget]) -> Vec<ClassDeficit> {
    let mut deficits: Vec<ClassDeficit> = targets
        .iter()
        .map(|target| {
            let current_pct = allocation.percentage_of(target.asset_class);
            let (target_pct, deficit_pct) = match target.target_type {
                TargetType::Percentage => (target.target, target.target.saturating_sub(current_pct)),
                TargetType::Value => {
                    let gap = target.target.saturating_sub(allocation.value_of(target.asset_class));
                    (
                        percentage(target.target, allocation.total),
                        percentage(gap, allocation.total).max(Decimal::ZERO),
                    )
                }
            };
            ClassDeficit {
                asset_class: target.asset_class,
                target_pct,
                current_pct,
                deficit_pct,
            }
        })
        .collect();
    deficits.sort_by(|a, b| {
        b.deficit_pct
            .cmp(&a.deficit_pct)
            .then_with(|| a.asset_class.cmp(&b.asset_class))
    });
    deficits
}

/// Splits `amount` across the two classes furthest below target,
/// proportionally to their deficits.
///
/// Returns no suggestions when the amount is not positive or every class is
/// at or above target.
pub fn suggest_contribution(
    amount: Decimal,
    allocation: &AllocationResult,
    targets: &[AllocationTarget],
) -> ContributionPlan {
    let top: Vec<(AssetClass, Decimal)> = class_deficits(allocation, targets)
        .into_iter()
        .filter(|d| d.deficit_pct > Decimal::ZERO)
        .take(CONTRIBUTION_SPLIT_CLASSES)
        .map(|d| (d.asset_class, d.deficit_pct))
        .collect();

    if amount <= Decimal::ZERO || top.is_empty() {
        return ContributionPlan {
            amount,
            suggestions: Vec::new(),
        };
    }

    let total_deficit = total(top.iter().map(|(_, d)| *d));
    let mut allocated = Decimal::ZERO;
    let mut suggestions = Vec::with_capacity(top.len());
    for (index, (asset_class, deficit_pct)) in top.iter().enumerate() {
        let share = deficit_pct.checked_div(total_deficit).unwrap_or(Decimal::ZERO);
        // The last class takes the remainder so the split sums exactly to the amount
        let suggested_amount = if index + 1 == top.len() {
            amount.saturating_sub(allocated)
        } else {
            product(amount, share)
        };
        allocated = allocated.saturating_add(suggested_amount);
        suggestions.push(ContributionSuggestion {
            asset_class: *asset_class,
            deficit_pct: *deficit_pct,
            suggested_amount,
            suggested_pct: product(share, Decimal::ONE_HUNDRED),
        });
    }

    ContributionPlan {
        amount,
        suggestions,
    }
}
