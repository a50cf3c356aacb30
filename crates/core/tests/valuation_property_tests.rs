//! Property-based integration tests for the valuation and allocation engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use carteira_core::fx::{Currency, ExchangeRate};
use carteira_core::holdings::{
    AccumulationGoal, AllocationTarget, EquityPosition, FixedIncomeHolding, GoalTargetType,
    IncomeFundPosition, PortfolioSnapshot, TargetType,
};
use carteira_core::portfolio::allocation::aggregate;
use carteira_core::portfolio::goals::goal_progress;
use carteira_core::portfolio::rebalancing::suggest_contribution;
use carteira_core::valuation::{
    bazin_fair_price, discount_premium, graham_fair_price, return_pct,
};
use carteira_core::{recompute, AssetClass, PortfolioSettings};
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Generators
// =============================================================================

/// Positive amount with two decimal places, up to 10 000.00.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Non-positive amount, down to -10 000.00.
fn arb_non_positive() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=0).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_sector() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Banks".to_string()),
        Just("Energy".to_string()),
        Just("Logistics".to_string()),
    ]
}

fn arb_equity() -> impl Strategy<Value = EquityPosition> {
    ("[A-Z]{4}[0-9]", arb_sector(), 0i64..5_000, arb_amount(), arb_amount()).prop_map(
        |(ticker, sector, quantity, cost, price)| EquityPosition {
            sector,
            ..EquityPosition::new(&ticker, Decimal::from(quantity), cost, price)
        },
    )
}

fn arb_fund() -> impl Strategy<Value = IncomeFundPosition> {
    ("[A-Z]{4}11", arb_sector(), 0i64..5_000, arb_amount(), arb_amount()).prop_map(
        |(ticker, sector, quantity, cost, price)| IncomeFundPosition {
            sector,
            ..IncomeFundPosition::new(&ticker, Decimal::from(quantity), cost, price)
        },
    )
}

fn arb_fixed_income() -> impl Strategy<Value = FixedIncomeHolding> {
    ("[a-z]{8}", arb_amount()).prop_map(|(id, value)| FixedIncomeHolding {
        id,
        title: "Bond".to_string(),
        applied_value: value,
        current_value: value,
        ..Default::default()
    })
}

fn arb_rate() -> impl Strategy<Value = ExchangeRate> {
    (100i64..1_000).prop_map(|r| ExchangeRate::new(Decimal::new(r, 2)).unwrap())
}

fn arb_asset_class() -> impl Strategy<Value = AssetClass> {
    prop_oneof![
        Just(AssetClass::DomesticEquities),
        Just(AssetClass::IncomeFunds),
        Just(AssetClass::InternationalEquities),
        Just(AssetClass::FixedIncome),
    ]
}

fn arb_targets() -> impl Strategy<Value = Vec<AllocationTarget>> {
    proptest::collection::vec((arb_asset_class(), 0i64..60), 0..4).prop_map(|raw| {
        let mut targets: Vec<AllocationTarget> = Vec::new();
        for (asset_class, target) in raw {
            if targets.iter().all(|t| t.asset_class != asset_class) {
                targets.push(AllocationTarget {
                    asset_class,
                    target: Decimal::from(target),
                    target_type: TargetType::Percentage,
                });
            }
        }
        targets
    })
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Graham squared equals 22.5 × eps × bvps for positive inputs.
    #[test]
    fn prop_graham_matches_formula(eps in arb_amount(), bvps in arb_amount()) {
        let graham = graham_fair_price(Some(eps), Some(bvps)).unwrap();
        let product = dec!(22.5) * eps * bvps;
        let relative_error = ((graham * graham - product) / product).abs();
        prop_assert!(relative_error < dec!(0.000001));
        prop_assert!(graham > Decimal::ZERO);
    }

    /// Graham is not computable when either input is non-positive.
    #[test]
    fn prop_graham_rejects_non_positive(bad in arb_non_positive(), good in arb_amount()) {
        prop_assert_eq!(graham_fair_price(Some(bad), Some(good)), None);
        prop_assert_eq!(graham_fair_price(Some(good), Some(bad)), None);
        prop_assert_eq!(graham_fair_price(None, Some(good)), None);
    }

    /// Bazin is the mean of up to five values divided by 6%.
    #[test]
    fn prop_bazin_is_mean_over_required_yield(
        history in proptest::collection::vec(arb_amount(), 1..=5)
    ) {
        let mean = history.iter().copied().sum::<Decimal>() / Decimal::from(history.len());
        prop_assert_eq!(bazin_fair_price(&history), Some(mean / dec!(0.06)));
    }

    /// Discount sign follows the sign of price minus fair price.
    #[test]
    fn prop_discount_sign_matches_gap(price in arb_amount(), fair in arb_amount()) {
        let discount = discount_premium(price, Some(fair)).unwrap();
        prop_assert_eq!(discount.cmp(&Decimal::ZERO), price.cmp(&fair));
        prop_assert_eq!(discount_premium(price, Some(Decimal::ZERO)), None);
        prop_assert_eq!(discount_premium(price, None), None);
    }

    /// A position without recorded cost is flat.
    #[test]
    fn prop_return_with_zero_cost_is_zero(price in arb_amount()) {
        prop_assert_eq!(return_pct(price, Decimal::ZERO), Decimal::ZERO);
    }

    /// Class percentages sum to 100 when anything is held, and are all 0 otherwise.
    #[test]
    fn prop_allocation_percentages_sum_to_hundred(
        equities in proptest::collection::vec(arb_equity(), 0..6),
        funds in proptest::collection::vec(arb_fund(), 0..4),
        intl in proptest::collection::vec(arb_equity(), 0..4),
        fixed in proptest::collection::vec(arb_fixed_income(), 0..3),
        rate in arb_rate(),
    ) {
        let result = aggregate(&equities, &funds, &intl, &fixed, rate);
        let sum: Decimal = result.classes.iter().map(|c| c.percentage).sum();
        if result.total > Decimal::ZERO {
            prop_assert!((sum - dec!(100)).abs() < dec!(0.000001));
        } else {
            prop_assert!(result.classes.iter().all(|c| c.percentage.is_zero()));
        }
    }

    /// Input order does not change the allocation.
    #[test]
    fn prop_allocation_is_order_independent(
        equities in proptest::collection::vec(arb_equity(), 0..6),
        funds in proptest::collection::vec(arb_fund(), 0..4),
        rate in arb_rate(),
    ) {
        let forward = aggregate(&equities, &funds, &[], &[], rate);
        let mut reversed_equities = equities.clone();
        reversed_equities.reverse();
        let mut reversed_funds = funds.clone();
        reversed_funds.reverse();
        let backward = aggregate(&reversed_equities, &reversed_funds, &[], &[], rate);
        prop_assert_eq!(forward, backward);
    }

    /// Recomputing an unchanged snapshot yields identical results.
    #[test]
    fn prop_recompute_is_idempotent(
        equities in proptest::collection::vec(arb_equity(), 0..6),
        intl in proptest::collection::vec(arb_equity(), 0..4),
    ) {
        let snapshot = PortfolioSnapshot {
            equities,
            intl_equities: intl
                .into_iter()
                .map(|p| EquityPosition { currency: Currency::Usd, ..p })
                .collect(),
            ..Default::default()
        };
        let settings = PortfolioSettings::default();
        prop_assert_eq!(
            recompute(&snapshot, &settings, today()),
            recompute(&snapshot, &settings, today())
        );
    }

    /// A contribution is split across at most two classes and fully allocated.
    #[test]
    fn prop_contribution_split_sums_to_amount(
        equities in proptest::collection::vec(arb_equity(), 0..6),
        fixed in proptest::collection::vec(arb_fixed_income(), 0..3),
        targets in arb_targets(),
        amount in arb_amount(),
    ) {
        let allocation = aggregate(&equities, &[], &[], &fixed, ExchangeRate::default());
        let plan = suggest_contribution(amount, &allocation, &targets);
        prop_assert!(plan.suggestions.len() <= 2);
        if !plan.suggestions.is_empty() {
            let sum: Decimal = plan.suggestions.iter().map(|s| s.suggested_amount).sum();
            prop_assert_eq!(sum, amount);
            prop_assert!(plan.suggestions.iter().all(|s| s.suggested_amount >= Decimal::ZERO));
        }
    }

    /// Goal progress never exceeds 100% and remaining is never negative.
    #[test]
    fn prop_goal_progress_is_bounded(
        position in arb_equity(),
        target in 0i64..10_000,
    ) {
        let goal = AccumulationGoal {
            id: "goal".to_string(),
            ticker: position.ticker.clone(),
            target_type: GoalTargetType::Quantity,
            target_quantity: Decimal::from(target),
            ..Default::default()
        };
        let progress = goal_progress(&goal, &[position], &[]);
        prop_assert!(progress.progress_pct <= dec!(100));
        prop_assert!(progress.progress_pct >= Decimal::ZERO);
        prop_assert!(progress.remaining >= Decimal::ZERO);
    }
}
