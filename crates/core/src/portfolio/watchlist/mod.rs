mod watchlist_calculator;


pub use watchlist_calculator::{watchlist_alerts, watchlist_counts, WatchlistCounts};
