//! Holdings module - the persisted portfolio records and keyed edits over them.

pub mod collection;
pub mod decimal_input;
mod holdings_model;

#[cfg(test)]
mod holdings_model_tests;

pub use collection::{EditRejection, Record};
pub use decimal_input::parse_decimal_input;
pub use holdings_model::*;
