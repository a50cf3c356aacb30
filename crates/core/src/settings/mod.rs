//! Settings module - presentation and conversion options applied on recompute.

mod settings_model;


pub use settings_model::{BrokerFilter, PortfolioSettings};
