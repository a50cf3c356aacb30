//! Carteira Core - Domain entities, calculators, and the portfolio store.
//!
//! This crate contains the valuation and allocation engine for Carteira.
//! It is storage-agnostic and defines the `SnapshotRepositoryTrait` that is
//! implemented by the `storage-json` crate.

pub mod constants;
pub mod errors;
pub mod events;
pub mod fx;
pub mod holdings;
pub mod portfolio;
pub mod settings;
pub mod store;
pub mod utils;
pub mod valuation;

// Re-export the types most callers need
pub use fx::{Currency, CurrencyDisplay, ExchangeRate};
pub use holdings::PortfolioSnapshot;
pub use portfolio::{recompute, AllocationResult, AssetClass, DerivedPortfolio};
pub use settings::{BrokerFilter, PortfolioSettings};
pub use store::{PortfolioStore, SnapshotRepositoryTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
