use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::income_model::DividendSummary;
use crate::constants::{DIVIDEND_PROJECTION_MONTHS, MONTHS_PER_YEAR};
use crate::holdings::DividendEvent;
use crate::utils::{product, total};

fn accumulate(map: &mut BTreeMap<String, Decimal>, key: String, value: Decimal) {
    let entry = map.entry(key).or_insert(Decimal::ZERO);
    *entry = entry.saturating_add(value);
}

/// Mean of the last `DIVIDEND_PROJECTION_MONTHS` entries of a month series.
fn average_recent_months(monthly_series: &BTreeMap<String, Decimal>) -> Decimal {
    let recent: Vec<Decimal> = monthly_series
        .values()
        .rev()
        .take(DIVIDEND_PROJECTION_MONTHS)
        .copied()
        .collect();
    if recent.is_empty() {
        return Decimal::ZERO;
    }
    total(recent.iter().copied())
        .checked_div(Decimal::from(recent.len()))
        .unwrap_or(Decimal::ZERO)
}

/// Summarizes dividend events against `today`, by calendar date only.
pub fn summarize_dividends(events: &[DividendEvent], today: NaiveDate) -> DividendSummary {
    let mut summary = DividendSummary {
        event_count: events.len(),
        ..Default::default()
    };

    for event in events {
        let month_key = event.date.format("%Y-%m").to_string();
        summary.total_received = summary.total_received.saturating_add(event.value);
        accumulate(
            &mut summary.by_currency,
            event.currency.code().to_string(),
            event.value,
        );
        accumulate(&mut summary.monthly_series, month_key.clone(), event.value);

        if event.date.year() != today.year() {
            continue;
        }
        summary.year_total = summary.year_total.saturating_add(event.value);
        accumulate(&mut summary.by_month, month_key, event.value);
        accumulate(&mut summary.by_ticker, event.ticker.clone(), event.value);

        if event.date.month() == today.month() {
            summary.month_total = summary.month_total.saturating_add(event.value);
        }
    }

    summary.avg_monthly = average_recent_months(&summary.monthly_series);
    summary.projected_annual = product(summary.avg_monthly, MONTHS_PER_YEAR);
    summary
}
