//! A file-backed key/value document.
//!
//! The file holds a single JSON object of `key -> value`. Writes go to a
//! sibling temporary file that is then renamed over the original.

use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::StorageError;

pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut document = self.read_document()?;
        Ok(document.remove(key))
    }

    pub fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut document = self.read_document_for_write()?;
        document.insert(key.to_string(), value);
        self.write_document(&document)
    }

    /// Removes `key`. Missing files and keys are not an error.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        if !self.path.exists() {
            return Ok(());
        }
        let mut document = self.read_document_for_write()?;
        if document.remove(key).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }

    fn read_document(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::Corrupted(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(StorageError::Corrupted(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Like `read_document`, but a corrupted file is replaced instead of
    /// blocking every future write.
    fn read_document_for_write(&self) -> Result<Map<String, Value>, StorageError> {
        match self.read_document() {
            Err(StorageError::Corrupted(reason)) => {
                warn!("Discarding corrupted storage file: {}", reason);
                Ok(Map::new())
            }
            other => other,
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(document)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;
        debug!("Wrote {} key(s) to {}", document.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.get("anything").unwrap().is_none());
        store.remove("anything").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = JsonFileStore::new(dir.path().join("nested").join("store.json"));

        store.set("a", json!({"x": 1})).unwrap();
        store.set("b", json!([1, 2])).unwrap();

        assert_eq!(store.get("a").unwrap(), Some(json!({"x": 1})));
        assert_eq!(store.get("b").unwrap(), Some(json!([1, 2])));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap(), Some(json!([1, 2])));
    }

    #[test]
    fn test_corrupted_file_fails_reads_but_not_writes() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(store.get("a"), Err(StorageError::Corrupted(_))));

        store.set("a", json!(true)).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!(true)));
    }
}
