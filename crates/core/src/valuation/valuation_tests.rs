use super::*;
use crate::holdings::{EquityPosition, SecurityType};
use rust_decimal_macros::dec;

fn stock(eps: Option<rust_decimal::Decimal>, bvps: Option<rust_decimal::Decimal>) -> EquityPosition {
    EquityPosition {
        eps,
        book_value_per_share: bvps,
        ..EquityPosition::new("PETR4", dec!(100), dec!(28), dec!(38))
    }
}

// ==================== Fair value ====================

#[test]
fn test_graham_fair_price() {
    let graham = graham_fair_price(Some(dec!(2)), Some(dec!(10))).unwrap();
    assert_eq!(graham.round_dp(2), dec!(21.21));
}

#[test]
fn test_graham_requires_positive_inputs() {
    assert_eq!(graham_fair_price(None, Some(dec!(10))), None);
    assert_eq!(graham_fair_price(Some(dec!(2)), None), None);
    assert_eq!(graham_fair_price(Some(dec!(-2)), Some(dec!(10))), None);
    assert_eq!(graham_fair_price(Some(dec!(2)), Some(dec!(0))), None);
}

#[test]
fn test_bazin_uses_mean_of_history() {
    let history = [dec!(3.80), dec!(4.20), dec!(3.50), dec!(5.10), dec!(4.60)];
    let bazin = bazin_fair_price(&history).unwrap();
    assert_eq!(bazin.round_dp(2), dec!(70.67));
    assert_eq!(bazin_fair_price(&[]), None);
}

#[test]
fn test_bazin_only_considers_last_five_years() {
    let history = [dec!(100), dec!(6), dec!(6), dec!(6), dec!(6), dec!(6)];
    assert_eq!(bazin_fair_price(&history), Some(dec!(100)));
}

#[test]
fn test_fair_price_takes_lower_estimate() {
    let mut position = stock(Some(dec!(2)), Some(dec!(10)));
    position.dividend_history = vec![dec!(6)];

    let breakdown = fair_value_breakdown(&position);
    assert_eq!(breakdown.bazin, Some(dec!(100)));
    assert_eq!(breakdown.source, FairValueSource::Graham);
    assert_eq!(breakdown.fair_price, breakdown.graham);
    assert_eq!(breakdown.calculated, breakdown.graham);
}

#[test]
fn test_fair_price_override_wins() {
    let mut position = stock(Some(dec!(2)), Some(dec!(10)));
    position.fair_price_override = Some(dec!(50));

    let breakdown = fair_value_breakdown(&position);
    assert_eq!(breakdown.fair_price, Some(dec!(50)));
    assert_eq!(breakdown.source, FairValueSource::Manual);
    assert!(breakdown.calculated.is_some());
}

#[test]
fn test_fair_price_unavailable_without_inputs() {
    let position = stock(None, None);
    let breakdown = fair_value_breakdown(&position);
    assert_eq!(breakdown.fair_price, None);
    assert_eq!(breakdown.source, FairValueSource::Unavailable);
}

#[test]
fn test_fundamental_models_only_apply_to_stocks() {
    let mut etf = stock(Some(dec!(2)), Some(dec!(10)));
    etf.security_type = SecurityType::Etf;
    etf.dividend_history = vec![dec!(6)];
    assert_eq!(fair_price(&etf), None);

    etf.fair_price_override = Some(dec!(40));
    assert_eq!(fair_price(&etf), Some(dec!(40)));
}

#[test]
fn test_zero_dividend_history_does_not_become_fair_price() {
    let mut position = stock(None, None);
    position.dividend_history = vec![dec!(0), dec!(0)];
    let breakdown = fair_value_breakdown(&position);
    assert_eq!(breakdown.bazin, Some(dec!(0)));
    assert_eq!(breakdown.fair_price, None);
}

// ==================== Classification ====================

#[test]
fn test_discount_premium() {
    assert_eq!(discount_premium(dec!(20), Some(dec!(25))), Some(dec!(-20)));
    assert_eq!(discount_premium(dec!(30), Some(dec!(25))), Some(dec!(20)));
    assert_eq!(discount_premium(dec!(20), Some(dec!(0))), None);
    assert_eq!(discount_premium(dec!(20), None), None);
}

#[test]
fn test_price_indicator_bands() {
    assert_eq!(PriceIndicator::from_discount_premium(Some(dec!(-20))), PriceIndicator::Positive);
    assert_eq!(PriceIndicator::from_discount_premium(Some(dec!(-15))), PriceIndicator::Positive);
    assert_eq!(PriceIndicator::from_discount_premium(Some(dec!(-14.99))), PriceIndicator::Warning);
    assert_eq!(PriceIndicator::from_discount_premium(Some(dec!(15))), PriceIndicator::Warning);
    assert_eq!(PriceIndicator::from_discount_premium(Some(dec!(15.01))), PriceIndicator::Negative);
    assert_eq!(PriceIndicator::from_discount_premium(None), PriceIndicator::Neutral);
}

#[test]
fn test_custom_thresholds() {
    let thresholds = IndicatorThresholds::new(dec!(-10), dec!(5)).unwrap();
    assert_eq!(thresholds.classify(Some(dec!(-12))), PriceIndicator::Positive);
    assert_eq!(thresholds.classify(Some(dec!(8))), PriceIndicator::Negative);

    assert!(IndicatorThresholds::new(dec!(5), dec!(10)).is_err());
    assert!(IndicatorThresholds::new(dec!(-10), dec!(-10)).is_err());
}

#[test]
fn test_thresholds_deserialization_validates() {
    let parsed: IndicatorThresholds =
        serde_json::from_str(r#"{"strongDiscountPct": -20, "strongPremiumPct": 10}"#).unwrap();
    assert_eq!(parsed.strong_discount_pct(), dec!(-20));
    assert!(serde_json::from_str::<IndicatorThresholds>(
        r#"{"strongDiscountPct": 20, "strongPremiumPct": 10}"#
    )
    .is_err());
}

// ==================== Returns ====================

#[test]
fn test_return_and_profit() {
    assert_eq!(return_pct(dec!(12), dec!(10)), dec!(20));
    assert_eq!(profit_loss(dec!(100), dec!(12), dec!(10)), dec!(200));
    assert_eq!(return_pct(dec!(12), dec!(0)), dec!(0));
}

#[test]
fn test_yield_on_cost() {
    assert_eq!(yield_on_cost(dec!(1.2), dec!(10)), dec!(12));
    assert_eq!(yield_on_cost(dec!(1.2), dec!(0)), dec!(0));
}

#[test]
fn test_fx_adjusted_return() {
    assert_eq!(fx_adjusted_return_pct(dec!(20), dec!(0)), dec!(20));
    assert_eq!(fx_adjusted_return_pct(dec!(10), dec!(10)), dec!(21));
}

#[test]
fn test_out_of_range_inputs_degrade_instead_of_panicking() {
    let huge = dec!(1000000000000000);
    assert_eq!(graham_fair_price(Some(huge), Some(huge)), None);
    assert_eq!(bazin_fair_price(&[rust_decimal::Decimal::MAX, rust_decimal::Decimal::MAX]), None);

    let tiny = dec!(0.0000000000000000000000000001);
    assert_eq!(discount_premium(huge, Some(tiny)), None);
    assert_eq!(return_pct(huge, tiny), rust_decimal::Decimal::ZERO);
    assert_eq!(yield_on_cost(huge, tiny), rust_decimal::Decimal::ZERO);
    assert_eq!(
        profit_loss(rust_decimal::Decimal::MAX, rust_decimal::Decimal::MAX, rust_decimal::Decimal::ZERO),
        rust_decimal::Decimal::MAX
    );
}
