//! Store module - owns the portfolio state, persists it and keeps the
//! derived portfolio current.

mod seed;
mod snapshot_codec;
mod store_service;
mod store_traits;


pub use seed::default_seed;
pub use snapshot_codec::{decode_snapshot, encode_snapshot, load_snapshot};
pub use store_service::{PortfolioStore, StoreOptions};
pub use store_traits::{Clock, FixedClock, SnapshotRepositoryTrait, SystemClock};
