//! JSON rendering of derived figures for the terminal.
//!
//! Monetary totals go through the configured currency display. Row-level
//! figures stay in their native denomination.

use carteira_core::constants::DISPLAY_DECIMAL_PRECISION;
use carteira_core::fx::present_amount;
use carteira_core::portfolio::rebalancing::ContributionPlan;
use carteira_core::DerivedPortfolio;
use rust_decimal::Decimal;
use serde_json::{json, Value};

fn round(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PRECISION)
}

fn money(derived: &DerivedPortfolio, domestic_amount: Decimal) -> Decimal {
    round(present_amount(
        domestic_amount,
        derived.currency_display,
        derived.exchange_rate,
    ))
}

pub fn summary(derived: &DerivedPortfolio) -> Value {
    json!({
        "asOf": derived.as_of,
        "currency": derived.currency_display.currency().code(),
        "exchangeRate": derived.exchange_rate.value(),
        "financial": money(derived, derived.patrimony.financial),
        "realAssets": money(derived, derived.patrimony.real_assets),
        "totalPatrimony": money(derived, derived.patrimony.total),
        "evolution": {
            "first": money(derived, derived.patrimony_evolution.first),
            "last": money(derived, derived.patrimony_evolution.last),
            "change": money(derived, derived.patrimony_evolution.change),
            "changePct": round(derived.patrimony_evolution.change_pct),
        },
        "dividends": {
            "monthTotal": round(derived.dividends.month_total),
            "yearTotal": round(derived.dividends.year_total),
            "totalReceived": round(derived.dividends.total_received),
            "avgMonthly": round(derived.dividends.avg_monthly),
            "projectedAnnual": round(derived.dividends.projected_annual),
            "events": derived.dividends.event_count,
        },
        "watchlistAlerts": derived.watchlist_counts.alerts,
        "goalsCompleted": derived.goals.completed,
    })
}

pub fn allocation(derived: &DerivedPortfolio) -> Value {
    let classes: Vec<Value> = derived
        .allocation
        .classes
        .iter()
        .map(|c| {
            json!({
                "class": c.asset_class.label(),
                "value": money(derived, c.value),
                "percentage": round(c.percentage),
            })
        })
        .collect();
    let sectors: Vec<Value> = derived
        .equity_sectors
        .iter()
        .map(|s| json!({ "sector": s.sector, "value": money(derived, s.value), "percentage": round(s.percentage) }))
        .collect();
    json!({
        "total": money(derived, derived.allocation.total),
        "classes": classes,
        "equitySectors": sectors,
    })
}

pub fn positions(derived: &DerivedPortfolio) -> Value {
    let equities: Vec<Value> = derived
        .equities
        .rows
        .iter()
        .chain(derived.intl_equities.rows.iter())
        .map(|row| {
            json!({
                "ticker": row.ticker,
                "broker": row.broker,
                "currency": row.currency.code(),
                "marketValue": round(row.market_value),
                "fairValue": row.fair_value.fair_price.map(round),
                "fairValueSource": row.fair_value.source,
                "discountPremium": row.discount_premium.map(round),
                "indicator": row.indicator,
                "returnPct": round(row.return_pct),
            })
        })
        .collect();
    let funds: Vec<Value> = derived
        .income_funds
        .rows
        .iter()
        .map(|row| {
            json!({
                "ticker": row.ticker,
                "marketValue": round(row.market_value),
                "yieldOnCost": round(row.yield_on_cost),
                "monthlyIncome": round(row.monthly_income),
            })
        })
        .collect();
    let fixed: Vec<Value> = derived
        .fixed_income
        .rows
        .iter()
        .map(|row| {
            json!({
                "title": row.title,
                "currentValue": round(row.current_value),
                "returnPct": round(row.return_pct),
                "daysToMaturity": row.days_to_maturity,
            })
        })
        .collect();
    json!({
        "equities": equities,
        "incomeFunds": funds,
        "fixedIncome": fixed,
    })
}

pub fn alerts(derived: &DerivedPortfolio) -> Value {
    let entries: Vec<Value> = derived
        .watchlist_alerts
        .iter()
        .map(|w| json!({ "ticker": w.ticker, "currentPrice": w.current_price, "targetPrice": w.target_price }))
        .collect();
    json!({ "alerts": entries, "counts": derived.watchlist_counts })
}

pub fn goals(derived: &DerivedPortfolio) -> Value {
    let goals: Vec<Value> = derived
        .goals
        .goals
        .iter()
        .map(|g| {
            json!({
                "ticker": g.ticker,
                "target": round(g.target),
                "progressPct": round(g.progress_pct),
                "remaining": round(g.remaining),
                "costToComplete": round(g.cost_to_complete),
            })
        })
        .collect();
    json!({
        "goals": goals,
        "completed": derived.goals.completed,
        "closestGoal": derived.goals.closest_goal,
        "totalCostToComplete": round(derived.goals.total_cost_to_complete),
    })
}

pub fn contribution(plan: &ContributionPlan) -> Value {
    let suggestions: Vec<Value> = plan
        .suggestions
        .iter()
        .map(|s| {
            json!({
                "class": s.asset_class.label(),
                "deficitPct": round(s.deficit_pct),
                "amount": round(s.suggested_amount),
                "share": round(s.suggested_pct),
            })
        })
        .collect();
    json!({ "amount": round(plan.amount), "suggestions": suggestions })
}
