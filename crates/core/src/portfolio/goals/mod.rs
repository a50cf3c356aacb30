//! Goals module - progress toward per-ticker accumulation goals.

mod goals_calculator;
mod goals_model;

#[cfg(test)]
mod goals_calculator_tests;

pub use goals_calculator::{goal_progress, summarize_goals};
pub use goals_model::{GoalProgress, GoalsSummary};
