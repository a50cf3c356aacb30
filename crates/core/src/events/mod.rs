//! Portfolio events module.
//!
//! Provides the event types and the sink trait the store notifies after
//! each mutation and recompute. Frontends implement the sink to refresh
//! whatever they render from the derived portfolio.

mod portfolio_event;
mod sink;

pub use portfolio_event::*;
pub use sink::*;
