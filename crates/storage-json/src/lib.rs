//! JSON file storage implementation for Carteira.
//!
//! This crate implements the repository trait defined in `carteira-core`.
//! It is the only place in the workspace that touches the filesystem.
//!
//! ```text
//! core (store)
//!      │
//!      ▼
//! storage-json (this crate)
//!      │
//!      ▼
//! key/value JSON file
//! ```

pub mod errors;
pub mod file_store;
pub mod memory;
pub mod snapshot_repository;

pub use errors::StorageError;
pub use file_store::JsonFileStore;
pub use memory::InMemorySnapshotRepository;
pub use snapshot_repository::JsonSnapshotRepository;
