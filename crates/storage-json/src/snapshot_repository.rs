use log::debug;
use serde_json::Value;
use std::sync::Arc;

use crate::file_store::JsonFileStore;
use carteira_core::constants::PORTFOLIO_STORAGE_KEY;
use carteira_core::errors::Result;
use carteira_core::store::SnapshotRepositoryTrait;

/// Persists the portfolio snapshot under a single key of a [`JsonFileStore`].
pub struct JsonSnapshotRepository {
    store: Arc<JsonFileStore>,
    key: String,
}

impl JsonSnapshotRepository {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self::with_key(store, PORTFOLIO_STORAGE_KEY)
    }

    pub fn with_key(store: Arc<JsonFileStore>, key: &str) -> Self {
        JsonSnapshotRepository {
            store,
            key: key.to_string(),
        }
    }
}

impl SnapshotRepositoryTrait for JsonSnapshotRepository {
    fn get_snapshot(&self) -> Result<Option<Value>> {
        Ok(self.store.get(&self.key)?)
    }

    fn save_snapshot(&self, snapshot: &Value) -> Result<()> {
        self.store.set(&self.key, snapshot.clone())?;
        debug!("Saved portfolio snapshot to {}", self.store.path().display());
        Ok(())
    }

    fn clear_snapshot(&self) -> Result<()> {
        Ok(self.store.remove(&self.key)?)
    }
}
