use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::allocation_model::{AllocationResult, AssetClass, ClassAllocation, SectorAllocation};
use crate::constants::OTHER_SECTOR;
use crate::fx::{Currency, ExchangeRate};
use crate::holdings::{EquityPosition, FixedIncomeHolding, IncomeFundPosition};
use crate::utils::{percent_of, total};

/// Share of `value` in `whole`, in percent. Zero when `whole` is zero.
pub(crate) fn percentage(value: Decimal, whole: Decimal) -> Decimal {
    percent_of(value, whole).unwrap_or(Decimal::ZERO)
}

/// Computes the asset class and sector allocation in domestic currency.
///
/// International positions are converted with `exchange_rate` regardless of
/// the currency recorded on them; fixed income is valued at its reported
/// current value.
pub fn aggregate(
    equities: &[EquityPosition],
    income_funds: &[IncomeFundPosition],
    intl_equities: &[EquityPosition],
    fixed_income: &[FixedIncomeHolding],
    exchange_rate: ExchangeRate,
) -> AllocationResult {
    let domestic = total(equities.iter().map(EquityPosition::market_value));
    let funds = total(income_funds.iter().map(IncomeFundPosition::market_value));
    let international = total(
        intl_equities
            .iter()
            .map(|p| exchange_rate.to_domestic(p.market_value(), Currency::Usd)),
    );
    let fixed = total(fixed_income.iter().map(|h| h.current_value));

    let grand_total = total([domestic, funds, international, fixed]);

    let classes = AssetClass::ALL
        .iter()
        .map(|asset_class| {
            let value = match asset_class {
                AssetClass::DomesticEquities => domestic,
                AssetClass::IncomeFunds => funds,
                AssetClass::InternationalEquities => international,
                AssetClass::FixedIncome => fixed,
            };
            ClassAllocation {
                asset_class: *asset_class,
                value,
                percentage: percentage(value, grand_total),
            }
        })
        .collect();

    let sectors = sector_breakdown(
        equities
            .iter()
            .map(|p| (p.sector.as_str(), p.market_value()))
            .chain(
                income_funds
                    .iter()
                    .map(|f| (f.sector.as_str(), f.market_value())),
            ),
    );

    AllocationResult {
        total: grand_total,
        classes,
        sectors,
    }
}

/// Groups `(sector, value)` pairs by sector label.
///
/// Blank labels land in the "Other" bucket. The result is ordered by value
/// descending, ties broken by sector name.
pub fn sector_breakdown<'a, I>(items: I) -> Vec<SectorAllocation>
where
    I: IntoIterator<Item = (&'a str, Decimal)>,
{
    let mut by_sector: BTreeMap<String, Decimal> = BTreeMap::new();
    for (sector, value) in items {
        let label = match sector.trim() {
            "" => OTHER_SECTOR,
            trimmed => trimmed,
        };
        let entry = by_sector.entry(label.to_string()).or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(value);
    }

    let sector_total = total(by_sector.values().copied());
    let mut sectors: Vec<SectorAllocation> = by_sector
        .into_iter()
        .map(|(sector, value)| SectorAllocation {
            sector,
            value,
            percentage: percentage(value, sector_total),
        })
        .collect();
    sectors.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.sector.cmp(&b.sector)));
    sectors
}
