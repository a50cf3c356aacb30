//! Allocation module - asset class and sector breakdown of the financial portfolio.

mod allocation_calculator;
mod allocation_model;


pub(crate) use allocation_calculator::percentage;
pub use allocation_calculator::{aggregate, sector_breakdown};
pub use allocation_model::*;
