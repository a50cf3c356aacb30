//! Built-in sample portfolio used when no persisted state can be restored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fx::Currency;
use crate::holdings::{
    AccumulationGoal, AllocationTarget, DividendEvent, EquityPosition, FixedIncomeHolding,
    GoalTargetType, IncomeFundPosition, InstrumentType, PatrimonyPoint, PortfolioSnapshot,
    RealAsset, RealAssetType, SecurityType, TargetType, WatchlistEntry, WatchlistStatus,
};
use crate::portfolio::allocation::AssetClass;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn stock(
    ticker: &str,
    name: &str,
    sector: &str,
    quantity: Decimal,
    average_cost: Decimal,
    current_price: Decimal,
    eps: Option<Decimal>,
    bvps: Option<Decimal>,
    dividend_history: &[Decimal],
    broker: &str,
) -> EquityPosition {
    EquityPosition {
        ticker: ticker.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        quantity,
        average_cost,
        current_price,
        eps,
        book_value_per_share: bvps,
        dividend_history: dividend_history.to_vec(),
        fair_price_override: None,
        broker: broker.to_string(),
        currency: Currency::Brl,
        security_type: SecurityType::Stock,
    }
}

#[allow(clippy::too_many_arguments)]
fn fund(
    ticker: &str,
    name: &str,
    sector: &str,
    quantity: Decimal,
    average_cost: Decimal,
    current_price: Decimal,
    price_to_book: Decimal,
    dividend_yield_12m: Decimal,
    last_distribution: Decimal,
) -> IncomeFundPosition {
    IncomeFundPosition {
        ticker: ticker.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        quantity,
        average_cost,
        current_price,
        price_to_book,
        dividend_yield_12m,
        last_distribution,
        broker: "BTG".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn intl(
    ticker: &str,
    name: &str,
    sector: &str,
    security_type: SecurityType,
    quantity: Decimal,
    average_cost: Decimal,
    current_price: Decimal,
    eps: Option<Decimal>,
    bvps: Option<Decimal>,
    dividend_history: &[Decimal],
) -> EquityPosition {
    EquityPosition {
        currency: Currency::Usd,
        security_type,
        ..stock(
            ticker,
            name,
            sector,
            quantity,
            average_cost,
            current_price,
            eps,
            bvps,
            dividend_history,
            "Avenue",
        )
    }
}

fn dividend(
    id: &str,
    on: NaiveDate,
    ticker: &str,
    kind: &str,
    value: Decimal,
    currency: Currency,
) -> DividendEvent {
    DividendEvent {
        id: id.to_string(),
        date: on,
        ticker: ticker.to_string(),
        kind: Some(kind.to_string()),
        value,
        currency,
    }
}

fn watch(
    ticker: &str,
    name: &str,
    sector: &str,
    current_price: Decimal,
    fair_price: Decimal,
    target_price: Decimal,
    status: WatchlistStatus,
) -> WatchlistEntry {
    WatchlistEntry {
        ticker: ticker.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        current_price,
        fair_price: Some(fair_price),
        target_price,
        status,
    }
}

fn quantity_goal(id: &str, ticker: &str, target: Decimal, note: &str) -> AccumulationGoal {
    AccumulationGoal {
        id: id.to_string(),
        ticker: ticker.to_string(),
        target_type: GoalTargetType::Quantity,
        target_quantity: target,
        target_value: Decimal::ZERO,
        note: note.to_string(),
    }
}

fn month(label: &str, total: Decimal) -> PatrimonyPoint {
    PatrimonyPoint {
        month: label.to_string(),
        total,
    }
}

/// The default dataset.
#[rustfmt::skip]
pub fn default_seed() -> PortfolioSnapshot {
    let equities = vec![
        stock("PETR4", "Petrobras PN", "Oil & Gas", dec!(200), dec!(28.50), dec!(37.80),
            Some(dec!(7.12)), Some(dec!(30.45)), &[dec!(3.80), dec!(4.20), dec!(3.50), dec!(5.10), dec!(4.60)], "BTG"),
        stock("VALE3", "Vale ON", "Mining", dec!(150), dec!(68.00), dec!(62.30),
            Some(dec!(10.25)), Some(dec!(52.80)), &[dec!(4.50), dec!(6.80), dec!(5.20), dec!(3.90), dec!(5.60)], "BTG"),
        stock("ITUB4", "Itau Unibanco PN", "Banks", dec!(300), dec!(25.20), dec!(33.40),
            Some(dec!(3.85)), Some(dec!(18.90)), &[dec!(1.20), dec!(1.35), dec!(1.10), dec!(1.50), dec!(1.40)], "BTG"),
        EquityPosition {
            fair_price_override: Some(dec!(42.00)),
            ..stock("WEGE3", "WEG ON", "Industrials", dec!(100), dec!(35.00), dec!(52.10),
                Some(dec!(1.45)), Some(dec!(5.20)), &[dec!(0.55), dec!(0.62), dec!(0.48), dec!(0.70), dec!(0.58)], "BTG")
        },
        stock("BBAS3", "Banco do Brasil ON", "Banks", dec!(250), dec!(42.00), dec!(56.70),
            Some(dec!(8.90)), Some(dec!(48.20)), &[dec!(2.80), dec!(3.20), dec!(2.50), dec!(3.80), dec!(3.40)], "XP"),
        stock("ABEV3", "Ambev ON", "Beverages", dec!(400), dec!(14.80), dec!(12.90),
            Some(dec!(0.98)), Some(dec!(5.60)), &[dec!(0.60), dec!(0.55), dec!(0.48), dec!(0.65), dec!(0.58)], "XP"),
    ];

    let income_funds = vec![
        fund("HGLG11", "CSHG Logistica FII", "Logistics", dec!(50), dec!(162.00), dec!(158.50), dec!(0.97), dec!(8.2), dec!(1.10)),
        fund("XPLG11", "XP Log FII", "Logistics", dec!(80), dec!(98.00), dec!(102.40), dec!(1.02), dec!(7.8), dec!(0.68)),
        fund("MXRF11", "Maxi Renda FII", "Real Estate Credit", dec!(200), dec!(10.20), dec!(10.05), dec!(0.98), dec!(11.5), dec!(0.10)),
        fund("KNRI11", "Kinea Renda Imob FII", "Hybrid", dec!(30), dec!(140.00), dec!(135.80), dec!(0.94), dec!(7.5), dec!(0.85)),
    ];

    let intl_equities = vec![
        intl("AAPL", "Apple Inc.", "Technology", SecurityType::Stock, dec!(15), dec!(155.00), dec!(192.50),
            Some(dec!(6.42)), Some(dec!(3.95)), &[dec!(0.82), dec!(0.88), dec!(0.92), dec!(0.96), dec!(1.00)]),
        intl("MSFT", "Microsoft Corp.", "Technology", SecurityType::Stock, dec!(10), dec!(280.00), dec!(415.20),
            Some(dec!(11.05)), Some(dec!(29.60)), &[dec!(2.24), dec!(2.48), dec!(2.72), dec!(2.96), dec!(3.00)]),
        intl("VOO", "Vanguard S&P 500 ETF", "Index Fund", SecurityType::Etf, dec!(8), dec!(380.00), dec!(502.30),
            None, None, &[dec!(5.50), dec!(5.90), dec!(6.10), dec!(6.30), dec!(6.50)]),
        intl("VNQ", "Vanguard Real Estate ETF", "Real Estate", SecurityType::Reit, dec!(20), dec!(82.00), dec!(88.60),
            None, None, &[dec!(3.20), dec!(2.80), dec!(3.40), dec!(3.60), dec!(3.80)]),
    ];

    let fixed_income = vec![
        FixedIncomeHolding {
            id: "rf1".to_string(),
            title: "Tesouro IPCA+ 2029".to_string(),
            instrument_type: InstrumentType::Treasury,
            rate: "IPCA + 6.20%".to_string(),
            applied_value: dec!(50000),
            current_value: dec!(58200),
            application_date: date(2023, 3, 15),
            maturity_date: Some(date(2029, 5, 15)),
            broker: "BTG".to_string(),
        },
        FixedIncomeHolding {
            id: "rf2".to_string(),
            title: "CDB Banco Inter 120% CDI".to_string(),
            instrument_type: InstrumentType::Cdb,
            rate: "120% CDI".to_string(),
            applied_value: dec!(30000),
            current_value: dec!(34800),
            application_date: date(2023, 8, 10),
            maturity_date: Some(date(2026, 8, 10)),
            broker: "XP".to_string(),
        },
        FixedIncomeHolding {
            id: "rf3".to_string(),
            title: "LCI Itau 95% CDI".to_string(),
            instrument_type: InstrumentType::Lci,
            rate: "95% CDI".to_string(),
            applied_value: dec!(20000),
            current_value: dec!(22100),
            application_date: date(2024, 1, 20),
            maturity_date: Some(date(2027, 1, 20)),
            broker: "BTG".to_string(),
        },
    ];

    let real_assets = vec![
        RealAsset {
            id: "ra1".to_string(),
            description: "Apartment - Belo Horizonte".to_string(),
            asset_type: RealAssetType::Property,
            estimated_value: dec!(450000),
            acquisition_date: Some(date(2021, 6, 1)),
            include_in_total: true,
        },
        RealAsset {
            id: "ra2".to_string(),
            description: "Honda Civic 2022".to_string(),
            asset_type: RealAssetType::Vehicle,
            estimated_value: dec!(115000),
            acquisition_date: Some(date(2022, 3, 15)),
            include_in_total: false,
        },
    ];

    let dividends = vec![
        dividend("div1", date(2025, 11, 5), "WEGE3", "Dividend", dec!(58.00), Currency::Brl),
        dividend("div2", date(2025, 11, 10), "HGLG11", "Distribution", dec!(55.00), Currency::Brl),
        dividend("div3", date(2025, 11, 15), "BBAS3", "Interest on equity", dec!(280.00), Currency::Brl),
        dividend("div4", date(2025, 11, 28), "AAPL", "Dividend", dec!(22.50), Currency::Usd),
        dividend("div5", date(2025, 12, 5), "PETR4", "Dividend", dec!(420.00), Currency::Brl),
        dividend("div6", date(2025, 12, 10), "HGLG11", "Distribution", dec!(56.00), Currency::Brl),
        dividend("div7", date(2025, 12, 15), "VALE3", "Dividend", dec!(480.00), Currency::Brl),
        dividend("div8", date(2025, 12, 28), "VOO", "Dividend", dec!(41.00), Currency::Usd),
        dividend("div9", date(2026, 1, 5), "ITUB4", "Interest on equity", dec!(140.00), Currency::Brl),
        dividend("div10", date(2026, 1, 10), "HGLG11", "Distribution", dec!(56.00), Currency::Brl),
        dividend("div11", date(2026, 1, 10), "XPLG11", "Distribution", dec!(55.00), Currency::Brl),
        dividend("div12", date(2026, 1, 15), "BBAS3", "Dividend", dec!(310.00), Currency::Brl),
        dividend("div13", date(2026, 1, 25), "MSFT", "Dividend", dec!(30.00), Currency::Usd),
    ];

    let watchlist = vec![
        watch("TAEE11", "Taesa UNT", "Utilities", dec!(36.50), dec!(42.00), dec!(33.00), WatchlistStatus::Interested),
        watch("EGIE3", "Engie Brasil ON", "Utilities", dec!(43.80), dec!(48.00), dec!(40.00), WatchlistStatus::Interested),
        watch("PETR4", "Petrobras PN", "Oil & Gas", dec!(37.80), dec!(42.70), dec!(35.00), WatchlistStatus::Owned),
        watch("FLRY3", "Fleury ON", "Healthcare", dec!(14.20), dec!(19.50), dec!(14.50), WatchlistStatus::Interested),
    ];

    let allocation_targets = [
        (AssetClass::DomesticEquities, dec!(30)),
        (AssetClass::IncomeFunds, dec!(15)),
        (AssetClass::InternationalEquities, dec!(20)),
        (AssetClass::FixedIncome, dec!(25)),
    ]
    .into_iter()
    .map(|(asset_class, target)| AllocationTarget {
        asset_class,
        target,
        target_type: TargetType::Percentage,
    })
    .collect();

    let accumulation_goals = vec![
        quantity_goal("goal-1", "ITUB4", dec!(500), "Long-term bank holding"),
        quantity_goal("goal-2", "BBAS3", dec!(400), "Dividend pillar"),
        quantity_goal("goal-3", "HGLG11", dec!(100), "Logistics income"),
        quantity_goal("goal-4", "PETR4", dec!(300), "Extraordinary dividends"),
    ];

    let patrimonial_history = vec![
        month("Aug/25", dec!(485000)),
        month("Sep/25", dec!(498000)),
        month("Oct/25", dec!(510000)),
        month("Nov/25", dec!(522000)),
        month("Dec/25", dec!(535000)),
        month("Jan/26", dec!(548000)),
    ];

    PortfolioSnapshot {
        equities,
        income_funds,
        intl_equities,
        fixed_income,
        real_assets,
        dividends,
        watchlist,
        allocation_targets,
        accumulation_goals,
        patrimonial_history,
    }
}
