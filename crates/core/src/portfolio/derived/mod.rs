//! Derived module - the full read model recomputed from a snapshot.

mod derived_model;
mod derived_service;


pub use derived_model::DerivedPortfolio;
pub use derived_service::recompute;
