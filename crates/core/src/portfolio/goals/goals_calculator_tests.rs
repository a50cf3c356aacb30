use super::*;
use crate::holdings::{AccumulationGoal, EquityPosition, GoalTargetType, IncomeFundPosition};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn quantity_goal(ticker: &str, target: Decimal) -> AccumulationGoal {
    AccumulationGoal {
        id: format!("goal-{}", ticker),
        ticker: ticker.to_string(),
        target_type: GoalTargetType::Quantity,
        target_quantity: target,
        ..Default::default()
    }
}

fn value_goal(ticker: &str, target: Decimal) -> AccumulationGoal {
    AccumulationGoal {
        id: format!("goal-{}", ticker),
        ticker: ticker.to_string(),
        target_type: GoalTargetType::Value,
        target_value: target,
        ..Default::default()
    }
}

#[test]
fn test_quantity_goal_progress() {
    let equities = vec![EquityPosition::new("BBAS3", dec!(250), dec!(20), dec!(28))];
    let progress = goal_progress(&quantity_goal("BBAS3", dec!(1000)), &equities, &[]);

    assert_eq!(progress.held_quantity, dec!(250));
    assert_eq!(progress.progress_pct, dec!(25));
    assert_eq!(progress.remaining, dec!(750));
    assert_eq!(progress.cost_to_complete, dec!(21000));
    assert!(!progress.is_complete());
}

#[test]
fn test_value_goal_counts_income_funds() {
    let funds = vec![IncomeFundPosition::new("MXRF11", dec!(1000), dec!(9), dec!(10))];
    let progress = goal_progress(&value_goal("mxrf11", dec!(20000)), &[], &funds);

    assert_eq!(progress.held_value, dec!(10000));
    assert_eq!(progress.progress_pct, dec!(50));
    assert_eq!(progress.remaining, dec!(10000));
    assert_eq!(progress.cost_to_complete, dec!(10000));
}

#[test]
fn test_progress_is_capped_at_hundred() {
    let equities = vec![EquityPosition::new("ITSA4", dec!(5000), dec!(8), dec!(10))];
    let progress = goal_progress(&quantity_goal("ITSA4", dec!(1000)), &equities, &[]);

    assert_eq!(progress.progress_pct, dec!(100));
    assert_eq!(progress.remaining, dec!(0));
    assert!(progress.is_complete());
}

#[test]
fn test_goal_without_target_or_holding() {
    let progress = goal_progress(&quantity_goal("TAEE11", dec!(0)), &[], &[]);
    assert_eq!(progress.progress_pct, dec!(0));
    assert!(!progress.is_complete());
}

#[test]
fn test_summarize_goals_picks_cheapest_open_goal() {
    let equities = vec![
        EquityPosition::new("BBAS3", dec!(900), dec!(20), dec!(28)),
        EquityPosition::new("ITSA4", dec!(5000), dec!(8), dec!(10)),
        EquityPosition::new("WEGE3", dec!(10), dec!(40), dec!(50)),
    ];
    let goals = vec![
        quantity_goal("BBAS3", dec!(1000)),
        quantity_goal("ITSA4", dec!(1000)),
        quantity_goal("WEGE3", dec!(100)),
    ];

    let summary = summarize_goals(&goals, &equities, &[]);

    assert_eq!(summary.completed, 1);
    assert_eq!(summary.closest_goal.as_deref(), Some("BBAS3"));
    assert_eq!(summary.total_cost_to_complete, dec!(7300));
}
