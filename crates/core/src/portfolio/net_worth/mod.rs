//! Net worth module - total patrimony and its monthly evolution.

mod net_worth_calculator;
mod net_worth_model;


pub use net_worth_calculator::{patrimony_evolution, total_patrimony};
pub use net_worth_model::{Patrimony, PatrimonyEvolution};
