//! Positions module - holdings enriched with valuation and return metrics.

mod positions_calculator;
mod positions_model;


pub use positions_calculator::*;
pub use positions_model::*;
