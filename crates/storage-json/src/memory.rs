use serde_json::Value;
use std::sync::Mutex;

use carteira_core::errors::{Error, PersistenceError, Result};
use carteira_core::store::SnapshotRepositoryTrait;

/// Keeps the snapshot in memory only. Used for ephemeral sessions and tests.
#[derive(Default)]
pub struct InMemorySnapshotRepository {
    document: Mutex<Option<Value>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(document: Value) -> Self {
        InMemorySnapshotRepository {
            document: Mutex::new(Some(document)),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<Value>>> {
        self.document
            .lock()
            .map_err(|_| Error::Persistence(PersistenceError::Internal("lock poisoned".to_string())))
    }
}

impl SnapshotRepositoryTrait for InMemorySnapshotRepository {
    fn get_snapshot(&self) -> Result<Option<Value>> {
        Ok(self.slot()?.clone())
    }

    fn save_snapshot(&self, snapshot: &Value) -> Result<()> {
        *self.slot()? = Some(snapshot.clone());
        Ok(())
    }

    fn clear_snapshot(&self) -> Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}
