use serde::{Deserialize, Serialize};

use crate::holdings::{WatchlistEntry, WatchlistStatus};

/// Entries whose current price reached or fell below the target price,
/// in insertion order.
pub fn watchlist_alerts(entries: &[WatchlistEntry]) -> Vec<WatchlistEntry> {
    entries
        .iter()
        .filter(|entry| entry.current_price <= entry.target_price)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistCounts {
    pub total: usize,
    pub interested: usize,
    pub owned: usize,
    pub alerts: usize,
}

pub fn watchlist_counts(entries: &[WatchlistEntry]) -> WatchlistCounts {
    entries
        .iter()
        .fold(WatchlistCounts::default(), |mut counts, entry| {
            counts.total += 1;
            match entry.status {
                WatchlistStatus::Interested => counts.interested += 1,
                WatchlistStatus::Owned => counts.owned += 1,
            }
            if entry.current_price <= entry.target_price {
                counts.alerts += 1;
            }
            counts
        })
}
