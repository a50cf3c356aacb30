use super::*;
use crate::fx::Currency;
use crate::holdings::DividendEvent;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn event(date: (i32, u32, u32), ticker: &str, value: Decimal) -> DividendEvent {
    DividendEvent {
        id: format!("{}-{}-{}", ticker, date.1, date.2),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        ticker: ticker.to_string(),
        value,
        ..Default::default()
    }
}

#[test]
fn test_month_and_year_totals() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let events = vec![
        event((2026, 10, 1), "PETR4", dec!(100)),
        event((2026, 10, 31), "BBAS3", dec!(50)),
        event((2026, 3, 15), "PETR4", dec!(80)),
        event((2025, 10, 15), "PETR4", dec!(999)),
    ];

    let summary = summarize_dividends(&events, today);

    assert_eq!(summary.month_total, dec!(150));
    assert_eq!(summary.year_total, dec!(230));
    assert_eq!(summary.total_received, dec!(1229));
    assert_eq!(summary.event_count, 4);
    assert_eq!(summary.by_month.get("2026-10"), Some(&dec!(150)));
    assert_eq!(summary.by_month.get("2026-03"), Some(&dec!(80)));
    assert_eq!(summary.by_month.get("2025-10"), None);
    assert_eq!(summary.by_ticker.get("PETR4"), Some(&dec!(180)));
}

#[test]
fn test_amounts_are_not_converted() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let mut usd = event((2026, 10, 5), "AAPL", dec!(10));
    usd.currency = Currency::Usd;
    let events = vec![usd, event((2026, 10, 5), "ITSA4", dec!(10))];

    let summary = summarize_dividends(&events, today);

    assert_eq!(summary.month_total, dec!(20));
    assert_eq!(summary.by_currency.get("USD"), Some(&dec!(10)));
    assert_eq!(summary.by_currency.get("BRL"), Some(&dec!(10)));
}

#[test]
fn test_empty_events() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert_eq!(summarize_dividends(&[], today), DividendSummary::default());
}

#[test]
fn test_monthly_series_spans_every_year() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let events = vec![
        event((2025, 10, 15), "PETR4", dec!(40)),
        event((2026, 3, 15), "PETR4", dec!(80)),
        event((2026, 3, 20), "VALE3", dec!(20)),
    ];

    let summary = summarize_dividends(&events, today);

    assert_eq!(summary.monthly_series.len(), 2);
    assert_eq!(summary.monthly_series.get("2025-10"), Some(&dec!(40)));
    assert_eq!(summary.monthly_series.get("2026-03"), Some(&dec!(100)));
    assert_eq!(summary.by_month.get("2025-10"), None);
}

#[test]
fn test_projection_averages_last_six_months_with_income() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    // Eight months with income; the two oldest fall outside the window
    let events: Vec<DividendEvent> = (1..=8)
        .map(|month| event((2026, month, 10), "ITSA4", Decimal::from(month * 10)))
        .collect();

    let summary = summarize_dividends(&events, today);

    // (30 + 40 + 50 + 60 + 70 + 80) / 6
    assert_eq!(summary.avg_monthly, dec!(55));
    assert_eq!(summary.projected_annual, dec!(660));
}

#[test]
fn test_projection_with_few_months() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let events = vec![
        event((2026, 9, 1), "PETR4", dec!(30)),
        event((2026, 9, 2), "PETR4", dec!(30)),
        event((2026, 10, 1), "PETR4", dec!(20)),
    ];

    let summary = summarize_dividends(&events, today);

    assert_eq!(summary.avg_monthly, dec!(40));
    assert_eq!(summary.projected_annual, dec!(480));
    assert_eq!(summarize_dividends(&[], today).projected_annual, Decimal::ZERO);
}
