//! Where the store reports its state transitions.

use std::sync::Mutex;

use log::{debug, warn};

use super::PortfolioEvent;

/// Receiver for store transitions.
///
/// The store calls `notify` once per transition with every event that
/// transition produced, ending with `Recomputed`. It runs inline while the
/// store is mutably borrowed, so implementations must not call back into it.
pub trait PortfolioEventSink: Send + Sync {
    fn notify(&self, events: &[PortfolioEvent]);
}

/// Drops every notification. Default for [`crate::store::StoreOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPortfolioEventSink;

impl PortfolioEventSink for NoOpPortfolioEventSink {
    fn notify(&self, _events: &[PortfolioEvent]) {}
}

/// Writes each transition to the `log` facade.
///
/// Persist failures go out at warn level so a frontend without its own sink
/// still surfaces them; everything else is debug.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogPortfolioEventSink;

impl PortfolioEventSink for LogPortfolioEventSink {
    fn notify(&self, events: &[PortfolioEvent]) {
        for event in events {
            match event {
                PortfolioEvent::PersistFailed { message } => {
                    warn!("Portfolio changes kept in memory only: {}", message)
                }
                PortfolioEvent::Recomputed {
                    as_of,
                    total_patrimony,
                } => debug!("Portfolio recomputed as of {} (total {})", as_of, total_patrimony),
                other => debug!("Portfolio event: {:?}", other),
            }
        }
    }
}

/// Keeps every notified event in arrival order. Used by store tests.
#[derive(Debug, Default)]
pub struct RecordingPortfolioEventSink {
    recorded: Mutex<Vec<PortfolioEvent>>,
}

impl RecordingPortfolioEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PortfolioEvent> {
        self.recorded
            .lock()
            .map(|recorded| recorded.clone())
            .unwrap_or_default()
    }

    /// Total patrimony carried by the most recent `Recomputed` event.
    pub fn last_recomputed_total(&self) -> Option<rust_decimal::Decimal> {
        self.events().iter().rev().find_map(|event| match event {
            PortfolioEvent::Recomputed {
                total_patrimony, ..
            } => Some(*total_patrimony),
            _ => None,
        })
    }

    pub fn clear(&self) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recorded
            .lock()
            .map(|recorded| recorded.is_empty())
            .unwrap_or(true)
    }
}

impl PortfolioEventSink for RecordingPortfolioEventSink {
    fn notify(&self, events: &[PortfolioEvent]) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.extend_from_slice(events);
        }
    }
}
