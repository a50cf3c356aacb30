//! Keyed edits over the persisted collections.
//!
//! Every edit is copy-on-write: the input slice is never touched and a new
//! vector is returned, so the store can swap the whole snapshot atomically.

use std::collections::HashSet;
use thiserror::Error;

/// A record stored in a keyed collection.
pub trait Record: Clone {
    /// Unique key of the record within its collection.
    fn key(&self) -> &str;

    /// Trims text fields, normalizes tickers and clamps amounts.
    fn sanitize(self) -> Self;

    /// Assigns a generated key to system-keyed records that lack one.
    fn ensure_key(&mut self) {}

    /// Whether required fields other than the key are present.
    fn is_complete(&self) -> bool {
        true
    }
}

/// Why an edit was refused. The collection is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditRejection {
    #[error("record has no key")]
    MissingKey,

    #[error("record is missing required fields")]
    Incomplete,

    #[error("a record with key '{0}' already exists")]
    DuplicateKey(String),

    #[error("no record with key '{0}'")]
    UnknownKey(String),
}

/// Keys compare trimmed and ASCII case-insensitively; other characters
/// must match exactly.
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_uppercase()
}

fn same_key(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn prepare<T: Record>(item: T) -> Result<T, EditRejection> {
    let mut item = item.sanitize();
    item.ensure_key();
    if item.key().is_empty() {
        return Err(EditRejection::MissingKey);
    }
    if !item.is_complete() {
        return Err(EditRejection::Incomplete);
    }
    Ok(item)
}

/// Returns `items` with `item` appended.
pub fn append<T: Record>(items: &[T], item: T) -> Result<Vec<T>, EditRejection> {
    let item = prepare(item)?;
    if items.iter().any(|existing| same_key(existing.key(), item.key())) {
        return Err(EditRejection::DuplicateKey(item.key().to_string()));
    }
    let mut next = items.to_vec();
    next.push(item);
    Ok(next)
}

/// Returns `items` with the record under `key` replaced in place.
///
/// The replacement may carry a new key as long as it doesn't collide with
/// another record.
pub fn replace_by_key<T: Record>(items: &[T], key: &str, item: T) -> Result<Vec<T>, EditRejection> {
    let item = item.sanitize();
    if item.key().is_empty() {
        return Err(EditRejection::MissingKey);
    }
    if !item.is_complete() {
        return Err(EditRejection::Incomplete);
    }
    let position = items
        .iter()
        .position(|existing| same_key(existing.key(), key))
        .ok_or_else(|| EditRejection::UnknownKey(key.trim().to_string()))?;
    let collides = items
        .iter()
        .enumerate()
        .any(|(i, existing)| i != position && same_key(existing.key(), item.key()));
    if collides {
        return Err(EditRejection::DuplicateKey(item.key().to_string()));
    }
    let mut next = items.to_vec();
    next[position] = item;
    Ok(next)
}

/// Returns `items` without the record under `key`.
pub fn remove_by_key<T: Record>(items: &[T], key: &str) -> Result<Vec<T>, EditRejection> {
    if !items.iter().any(|existing| same_key(existing.key(), key)) {
        return Err(EditRejection::UnknownKey(key.trim().to_string()));
    }
    Ok(items
        .iter()
        .filter(|existing| !same_key(existing.key(), key))
        .cloned()
        .collect())
}

/// Sanitizes a whole collection: unusable records are dropped and only the
/// first record of each key is kept.
pub fn replace_all<T: Record>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| prepare(item).ok())
        .filter(|item| seen.insert(normalize_key(item.key())))
        .collect()
}
