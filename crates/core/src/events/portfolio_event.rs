//! Portfolio event types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::CollectionKind;

/// Events emitted by the store.
///
/// A mutation event is always followed by `Recomputed` once the derived
/// portfolio has been replaced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PortfolioEvent {
    /// State was restored at startup.
    Loaded {
        /// True when the default seed was used instead of persisted state
        from_seed: bool,
    },

    /// A collection was replaced.
    CollectionChanged { collection: CollectionKind },

    /// Exchange rate, display currency, broker filter or thresholds changed.
    SettingsChanged,

    /// Collections were restored to the seed and persisted state cleared.
    Reset,

    /// The derived portfolio was replaced.
    Recomputed {
        as_of: NaiveDate,
        total_patrimony: Decimal,
    },

    /// Persisting the snapshot failed; in-memory state is still current.
    PersistFailed { message: String },
}

impl PortfolioEvent {
    pub fn collection_changed(collection: CollectionKind) -> Self {
        PortfolioEvent::CollectionChanged { collection }
    }

    pub fn persist_failed(message: impl Into<String>) -> Self {
        PortfolioEvent::PersistFailed {
            message: message.into(),
        }
    }
}
