use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::GoalTargetType;

/// Progress of one accumulation goal against current holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub ticker: String,
    pub target_type: GoalTargetType,
    pub held_quantity: Decimal,
    pub held_value: Decimal,
    pub current_price: Decimal,
    /// Share count or domestic amount, per `target_type`
    pub target: Decimal,
    /// Capped at 100; zero when no target is set
    pub progress_pct: Decimal,
    /// Shares or amount still missing, never negative
    pub remaining: Decimal,
    pub cost_to_complete: Decimal,
    pub note: String,
}

impl GoalProgress {
    pub fn is_complete(&self) -> bool {
        !self.target.is_zero() && self.remaining.is_zero()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsSummary {
    pub goals: Vec<GoalProgress>,
    pub completed: usize,
    /// Open goal that is cheapest to complete
    pub closest_goal: Option<String>,
    pub total_cost_to_complete: Decimal,
}
