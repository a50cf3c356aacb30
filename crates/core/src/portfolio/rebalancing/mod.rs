//! Rebalancing module - splits a new contribution toward under-weighted classes.

mod rebalancing_calculator;
mod rebalancing_model;


pub use rebalancing_calculator::{class_deficits, suggest_contribution};
pub use rebalancing_model::{ClassDeficit, ContributionPlan, ContributionSuggestion};
