use chrono::NaiveDate;
use log::debug;

use super::derived_model::DerivedPortfolio;
use crate::holdings::PortfolioSnapshot;
use crate::portfolio::allocation::{aggregate, sector_breakdown};
use crate::portfolio::goals::summarize_goals;
use crate::portfolio::income::summarize_dividends;
use crate::portfolio::net_worth::{patrimony_evolution, total_patrimony};
use crate::portfolio::positions::{
    enrich_equity, enrich_fixed_income, enrich_income_fund, equity_view, fixed_income_view,
    income_fund_view,
};
use crate::portfolio::watchlist::{watchlist_alerts, watchlist_counts};
use crate::settings::PortfolioSettings;

/// Recomputes every derived figure from `snapshot`.
///
/// Pure: the same snapshot, settings and date always produce the same
/// result. The broker filter narrows the position views only; allocation,
/// patrimony and summaries always cover the whole snapshot.
pub fn recompute(snapshot: &PortfolioSnapshot, settings: &PortfolioSettings, today: NaiveDate) -> DerivedPortfolio {
    let rate = settings.exchange_rate;
    let thresholds = &settings.indicator_thresholds;
    let filter = &settings.broker_filter;

    let equities = equity_view(
        snapshot
            .equities
            .iter()
            .filter(|p| filter.matches(&p.broker))
            .map(|p| enrich_equity(p, thresholds, rate))
            .collect(),
    );
    let intl_equities = equity_view(
        snapshot
            .intl_equities
            .iter()
            .filter(|p| filter.matches(&p.broker))
            .map(|p| enrich_equity(p, thresholds, rate))
            .collect(),
    );
    let income_funds = income_fund_view(
        snapshot
            .income_funds
            .iter()
            .filter(|f| filter.matches(&f.broker))
            .map(enrich_income_fund)
            .collect(),
    );
    let fixed_income = fixed_income_view(
        snapshot
            .fixed_income
            .iter()
            .filter(|h| filter.matches(&h.broker))
            .map(|h| enrich_fixed_income(h, today))
            .collect(),
    );

    let equity_sectors = sector_breakdown(
        equities
            .rows
            .iter()
            .map(|r| (r.sector.as_str(), r.market_value)),
    );
    let intl_sectors = sector_breakdown(
        intl_equities
            .rows
            .iter()
            .map(|r| (r.sector.as_str(), r.market_value)),
    );

    let allocation = aggregate(
        &snapshot.equities,
        &snapshot.income_funds,
        &snapshot.intl_equities,
        &snapshot.fixed_income,
        rate,
    );
    let patrimony = total_patrimony(allocation.total, &snapshot.real_assets);

    debug!(
        "Recomputed portfolio as of {}: {} positions, patrimony {}",
        today,
        snapshot.equities.len()
            + snapshot.income_funds.len()
            + snapshot.intl_equities.len()
            + snapshot.fixed_income.len(),
        patrimony.total
    );

    DerivedPortfolio {
        as_of: today,
        exchange_rate: rate,
        currency_display: settings.currency_display,
        equities,
        intl_equities,
        income_funds,
        fixed_income,
        equity_sectors,
        intl_sectors,
        allocation,
        patrimony,
        patrimony_evolution: patrimony_evolution(&snapshot.patrimonial_history),
        dividends: summarize_dividends(&snapshot.dividends, today),
        watchlist_alerts: watchlist_alerts(&snapshot.watchlist),
        watchlist_counts: watchlist_counts(&snapshot.watchlist),
        goals: summarize_goals(
            &snapshot.accumulation_goals,
            &snapshot.equities,
            &snapshot.income_funds,
        ),
    }
}
