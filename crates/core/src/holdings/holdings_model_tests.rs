//! Tests for holdings models: lenient input, legacy field names and sanitizing.

#[cfg(test)]
mod tests {
    use crate::fx::Currency;
    use crate::holdings::{
        parse_decimal_input, CollectionKind, DividendEvent, EquityPosition, FixedIncomeHolding,
        PortfolioSnapshot, Record, SecurityType, WatchlistStatus,
    };
    use rust_decimal_macros::dec;

    // ==================== Decimal input ====================

    #[test]
    fn test_parse_decimal_input_accepts_both_separators() {
        assert_eq!(parse_decimal_input("38,50").unwrap(), dec!(38.50));
        assert_eq!(parse_decimal_input("38.50").unwrap(), dec!(38.50));
        assert_eq!(parse_decimal_input("1.234,56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal_input("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal_input(" 12 ").unwrap(), dec!(12));
    }

    #[test]
    fn test_parse_decimal_input_rejects_garbage() {
        assert!(parse_decimal_input("").is_err());
        assert!(parse_decimal_input("abc").is_err());
    }

    // ==================== Deserialization ====================

    #[test]
    fn test_equity_accepts_legacy_field_names() {
        let json = r#"{
            "ticker": "PETR4",
            "name": "Petrobras",
            "sector": "Energy",
            "qty": 100,
            "avgPrice": "28,50",
            "currentPrice": 38.5,
            "lpa": 8.2,
            "vpa": "32.1",
            "dividends5y": [3.8, "4,2", "x", -1],
            "fairPriceManual": null,
            "type": "Stock"
        }"#;
        let position: EquityPosition = serde_json::from_str(json).unwrap();
        assert_eq!(position.quantity, dec!(100));
        assert_eq!(position.average_cost, dec!(28.50));
        assert_eq!(position.current_price, dec!(38.5));
        assert_eq!(position.eps, Some(dec!(8.2)));
        assert_eq!(position.book_value_per_share, Some(dec!(32.1)));
        assert_eq!(
            position.dividend_history,
            vec![dec!(3.8), dec!(4.2), dec!(0), dec!(0)]
        );
        assert_eq!(position.fair_price_override, None);
        assert_eq!(position.security_type, SecurityType::Stock);
        assert_eq!(position.currency, Currency::Brl);
    }

    #[test]
    fn test_garbage_numbers_degrade_to_zero() {
        let json = r#"{"ticker": "ITSA4", "quantity": "lots", "averageCost": -3, "currentPrice": {}}"#;
        let position: EquityPosition = serde_json::from_str(json).unwrap();
        assert_eq!(position.quantity, dec!(0));
        assert_eq!(position.average_cost, dec!(0));
        assert_eq!(position.current_price, dec!(0));
        assert_eq!(position.eps, None);
    }

    #[test]
    fn test_intl_equity_accepts_usd_field_names() {
        let json = r#"{"ticker": "AAPL", "qty": 10, "avgPriceUsd": 150, "currentPriceUsd": 190.5, "currency": "USD", "type": "ETF"}"#;
        let position: EquityPosition = serde_json::from_str(json).unwrap();
        assert_eq!(position.average_cost, dec!(150));
        assert_eq!(position.current_price, dec!(190.5));
        assert_eq!(position.currency, Currency::Usd);
        assert_eq!(position.security_type, SecurityType::Etf);
    }

    #[test]
    fn test_dividend_event_accepts_type_alias() {
        let json = r#"{"date": "2026-03-15", "ticker": "bbas3", "type": "JCP", "value": "120,40"}"#;
        let event: DividendEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind.as_deref(), Some("JCP"));
        assert_eq!(event.value, dec!(120.40));
        assert_eq!(event.currency, Currency::Brl);
    }

    #[test]
    fn test_watchlist_status_accepts_local_labels() {
        assert_eq!(
            serde_json::from_str::<WatchlistStatus>("\"Possui\"").unwrap(),
            WatchlistStatus::Owned
        );
        assert_eq!(
            serde_json::from_str::<WatchlistStatus>("\"INTERESTED\"").unwrap(),
            WatchlistStatus::Interested
        );
    }

    // ==================== Sanitizing ====================

    #[test]
    fn test_sanitize_normalizes_ticker_and_clamps_amounts() {
        let mut position = EquityPosition::new("  petr4 ", dec!(-5), dec!(10), dec!(12));
        position.fair_price_override = Some(dec!(-1));
        position.eps = Some(dec!(-2.5));
        let position = position.sanitize();
        assert_eq!(position.ticker, "PETR4");
        assert_eq!(position.quantity, dec!(0));
        assert_eq!(position.fair_price_override, None);
        // Negative earnings are meaningful and kept
        assert_eq!(position.eps, Some(dec!(-2.5)));
    }

    #[test]
    fn test_system_keyed_records_get_generated_ids() {
        let mut holding = FixedIncomeHolding {
            title: "CDB Banco X".to_string(),
            ..Default::default()
        };
        holding.ensure_key();
        assert!(!holding.key().is_empty());

        let original = holding.id.clone();
        holding.ensure_key();
        assert_eq!(holding.id, original);
    }

    #[test]
    fn test_market_value_and_cost_basis() {
        let position = EquityPosition::new("VALE3", dec!(50), dec!(60), dec!(65));
        assert_eq!(position.market_value(), dec!(3250));
        assert_eq!(position.cost_basis(), dec!(3000));
    }

    // ==================== Snapshot ====================

    #[test]
    fn test_snapshot_optional_collections_default_to_empty() {
        let json = r#"{
            "equities": [], "incomeFunds": [], "intlEquities": [], "fixedIncome": [],
            "realAssets": [], "dividends": [], "watchlist": []
        }"#;
        let snapshot: PortfolioSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.allocation_targets.is_empty());
        assert!(snapshot.accumulation_goals.is_empty());

        let encoded = serde_json::to_value(&snapshot).unwrap();
        assert!(encoded.get("patrimonialHistory").is_none());
        assert!(encoded.get("intlEquities").is_some());
    }

    #[test]
    fn test_normalize_currencies_pins_collection_denomination() {
        let mut snapshot = PortfolioSnapshot::default();
        let mut domestic = EquityPosition::new("WEGE3", dec!(1), dec!(1), dec!(1));
        domestic.currency = Currency::Usd;
        snapshot.equities.push(domestic);
        snapshot
            .intl_equities
            .push(EquityPosition::new("MSFT", dec!(1), dec!(1), dec!(1)));

        snapshot.normalize_currencies();

        assert_eq!(snapshot.equities[0].currency, Currency::Brl);
        assert_eq!(snapshot.intl_equities[0].currency, Currency::Usd);
    }

    #[test]
    fn test_collection_kind_storage_keys_match_snapshot_fields() {
        let encoded = serde_json::to_value(PortfolioSnapshot::default()).unwrap();
        for kind in [
            CollectionKind::Equities,
            CollectionKind::IncomeFunds,
            CollectionKind::IntlEquities,
            CollectionKind::FixedIncome,
            CollectionKind::RealAssets,
            CollectionKind::Dividends,
            CollectionKind::Watchlist,
            CollectionKind::AllocationTargets,
            CollectionKind::AccumulationGoals,
        ] {
            assert!(encoded.get(kind.storage_key()).is_some(), "{}", kind);
        }
    }
}
