use rust_decimal::Decimal;

use super::goals_model::{GoalProgress, GoalsSummary};
use crate::holdings::{AccumulationGoal, EquityPosition, GoalTargetType, IncomeFundPosition};
use crate::utils::{percent_of, product, total};

/// Quantity held and current price of `ticker` across domestic equities and
/// income funds.
fn holding_of(
    ticker: &str,
    equities: &[EquityPosition],
    income_funds: &[IncomeFundPosition],
) -> (Decimal, Decimal) {
    let from_equities = equities
        .iter()
        .filter(|p| p.ticker.eq_ignore_ascii_case(ticker))
        .map(|p| (p.quantity, p.current_price));
    let from_funds = income_funds
        .iter()
        .filter(|f| f.ticker.eq_ignore_ascii_case(ticker))
        .map(|f| (f.quantity, f.current_price));

    from_equities
        .chain(from_funds)
        .fold((Decimal::ZERO, Decimal::ZERO), |(quantity, price), (q, p)| {
            (quantity.saturating_add(q), if price.is_zero() { p } else { price })
        })
}

fn capped_progress(held: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    percent_of(held, target)
        .map_or(Decimal::ONE_HUNDRED, |pct| pct.min(Decimal::ONE_HUNDRED))
}

pub fn goal_progress(
    goal: &AccumulationGoal,
    equities: &[EquityPosition],
    income_funds: &[IncomeFundPosition],
) -> GoalProgress {
    let (held_quantity, current_price) = holding_of(&goal.ticker, equities, income_funds);
    let held_value = product(held_quantity, current_price);

    let (target, progress_pct, remaining, cost_to_complete) = match goal.target_type {
        GoalTargetType::Quantity => {
            let remaining = goal.target_quantity.saturating_sub(held_quantity).max(Decimal::ZERO);
            (
                goal.target_quantity,
                capped_progress(held_quantity, goal.target_quantity),
                remaining,
                product(remaining, current_price),
            )
        }
        GoalTargetType::Value => {
            let remaining = goal.target_value.saturating_sub(held_value).max(Decimal::ZERO);
            (
                goal.target_value,
                capped_progress(held_value, goal.target_value),
                remaining,
                remaining,
            )
        }
    };

    GoalProgress {
        goal_id: goal.id.clone(),
        ticker: goal.ticker.clone(),
        target_type: goal.target_type,
        held_quantity,
        held_value,
        current_price,
        target,
        progress_pct,
        remaining,
        cost_to_complete,
        note: goal.note.clone(),
    }
}

pub fn summarize_goals(
    goals: &[AccumulationGoal],
    equities: &[EquityPosition],
    income_funds: &[IncomeFundPosition],
) -> GoalsSummary {
    let goals: Vec<GoalProgress> = goals
        .iter()
        .map(|goal| goal_progress(goal, equities, income_funds))
        .collect();

    let completed = goals.iter().filter(|g| g.is_complete()).count();
    let closest_goal = goals
        .iter()
        .filter(|g| g.cost_to_complete > Decimal::ZERO)
        .min_by(|a, b| a.cost_to_complete.cmp(&b.cost_to_complete))
        .map(|g| g.ticker.clone());
    let total_cost_to_complete = total(goals.iter().map(|g| g.cost_to_complete));

    GoalsSummary {
        goals,
        completed,
        closest_goal,
        total_cost_to_complete,
    }
}
