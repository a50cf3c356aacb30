use super::*;
use rust_decimal_macros::dec;

#[test]
fn test_exchange_rate_rejects_non_positive_values() {
    assert!(ExchangeRate::new(dec!(0)).is_err());
    assert!(ExchangeRate::new(dec!(-5.0)).is_err());
    assert_eq!(ExchangeRate::new(dec!(5.0)).unwrap().value(), dec!(5.0));
}

#[test]
fn test_to_domestic_only_converts_usd() {
    let rate = ExchangeRate::new(dec!(5.0)).unwrap();
    assert_eq!(rate.to_domestic(dec!(100), Currency::Usd), dec!(500));
    assert_eq!(rate.to_domestic(dec!(100), Currency::Brl), dec!(100));
}

#[test]
fn test_present_amount_follows_display_toggle() {
    let rate = ExchangeRate::new(dec!(5.0)).unwrap();
    assert_eq!(present_amount(dec!(1500), CurrencyDisplay::Domestic, rate), dec!(1500));
    assert_eq!(present_amount(dec!(1500), CurrencyDisplay::Foreign, rate), dec!(300));
}

#[test]
fn test_exchange_rate_deserialization_validates() {
    let rate: ExchangeRate = serde_json::from_str("6.05").unwrap();
    assert_eq!(rate.value(), dec!(6.05));
    assert!(serde_json::from_str::<ExchangeRate>("0").is_err());
}

#[test]
fn test_currency_display_accepts_currency_codes() {
    assert_eq!(
        serde_json::from_str::<CurrencyDisplay>("\"USD\"").unwrap(),
        CurrencyDisplay::Foreign
    );
    assert_eq!(
        serde_json::from_str::<CurrencyDisplay>("\"DOMESTIC\"").unwrap(),
        CurrencyDisplay::Domestic
    );
    assert_eq!(CurrencyDisplay::Foreign.currency(), Currency::Usd);
}
