//! Portfolio module - pure calculators over the holdings and the derived read model.

pub mod allocation;
pub mod derived;
pub mod goals;
pub mod income;
pub mod net_worth;
pub mod positions;
pub mod rebalancing;
pub mod watchlist;

pub use allocation::{AllocationResult, AssetClass};
pub use derived::{recompute, DerivedPortfolio};
