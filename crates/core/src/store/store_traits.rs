use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::errors::Result;

/// Persistence hook for the portfolio snapshot.
///
/// Implementations store one opaque JSON document. Decoding happens in the
/// core so that incompatible collections can fall back one by one.
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Returns the persisted document, or `None` when nothing was saved yet.
    fn get_snapshot(&self) -> Result<Option<Value>>;

    /// Replaces the persisted document.
    fn save_snapshot(&self, snapshot: &Value) -> Result<()>;

    /// Removes the persisted document. Succeeds when nothing is stored.
    fn clear_snapshot(&self) -> Result<()>;
}

/// Source of the reference date for date-relative summaries.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
