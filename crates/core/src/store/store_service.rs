use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::seed::default_seed;
use super::snapshot_codec::{encode_snapshot, load_snapshot};
use super::store_traits::{Clock, SnapshotRepositoryTrait, SystemClock};
use crate::errors::{LoadError, Result};
use crate::events::{NoOpPortfolioEventSink, PortfolioEvent, PortfolioEventSink};
use crate::fx::{CurrencyDisplay, ExchangeRate};
use crate::holdings::collection::{self, EditRejection};
use crate::holdings::{
    AccumulationGoal, AllocationTarget, CollectionKind, DividendEvent, EquityPosition,
    FixedIncomeHolding, IncomeFundPosition, PortfolioSnapshot, RealAsset, WatchlistEntry,
};
use crate::portfolio::derived::{recompute, DerivedPortfolio};
use crate::portfolio::rebalancing::{suggest_contribution, ContributionPlan};
use crate::settings::{BrokerFilter, PortfolioSettings};
use crate::valuation::IndicatorThresholds;

/// Generates the add/update/delete/set operations of one collection.
macro_rules! collection_edits {
    ($kind:expr, $field:ident, $ty:ty, $add:ident, $update:ident, $delete:ident, $set:ident) => {
        /// Appends a record. Returns `false` when the edit was dropped.
        pub fn $add(&mut self, item: $ty) -> bool {
            let next = collection::append(&self.snapshot.$field, item);
            self.apply($kind, next, |snapshot, items| snapshot.$field = items)
        }

        /// Replaces the record stored under `key`. Returns `false` when the edit was dropped.
        pub fn $update(&mut self, key: &str, item: $ty) -> bool {
            let next = collection::replace_by_key(&self.snapshot.$field, key, item);
            self.apply($kind, next, |snapshot, items| snapshot.$field = items)
        }

        /// Removes the record stored under `key`. Returns `false` when the edit was dropped.
        pub fn $delete(&mut self, key: &str) -> bool {
            let next = collection::remove_by_key(&self.snapshot.$field, key);
            self.apply($kind, next, |snapshot, items| snapshot.$field = items)
        }

        /// Replaces the whole collection. Unusable and duplicate records are dropped.
        pub fn $set(&mut self, items: Vec<$ty>) {
            let next = collection::replace_all(items);
            self.commit($kind, |snapshot| snapshot.$field = next);
        }
    };
}

/// Construction options for [`PortfolioStore`].
pub struct StoreOptions {
    /// Dataset used when nothing can be restored and on reset
    pub seed: PortfolioSnapshot,
    pub clock: Arc<dyn Clock>,
    pub event_sink: Arc<dyn PortfolioEventSink>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            seed: default_seed(),
            clock: Arc::new(SystemClock),
            event_sink: Arc::new(NoOpPortfolioEventSink),
        }
    }
}

/// Owner of the portfolio state.
///
/// The store is the only writer of the snapshot. Every mutation replaces a
/// collection wholesale, persists the full snapshot (best effort) and
/// recomputes the derived portfolio, which readers hold as an immutable
/// `Arc` until the next recompute supersedes it.
pub struct PortfolioStore {
    repository: Arc<dyn SnapshotRepositoryTrait>,
    event_sink: Arc<dyn PortfolioEventSink>,
    clock: Arc<dyn Clock>,
    seed: PortfolioSnapshot,
    snapshot: PortfolioSnapshot,
    settings: PortfolioSettings,
    derived: Arc<DerivedPortfolio>,
}

impl PortfolioStore {
    pub fn new(repository: Arc<dyn SnapshotRepositoryTrait>, settings: PortfolioSettings) -> Self {
        Self::with_options(repository, settings, StoreOptions::default())
    }

    /// Restores persisted state, falling back to the seed. Never fails.
    pub fn with_options(
        repository: Arc<dyn SnapshotRepositoryTrait>,
        settings: PortfolioSettings,
        options: StoreOptions,
    ) -> Self {
        let StoreOptions {
            seed,
            clock,
            event_sink,
        } = options;

        let (snapshot, from_seed) = match load_snapshot(repository.as_ref(), &seed) {
            Ok(snapshot) => (snapshot, false),
            Err(LoadError::NotFound) => {
                info!("No persisted portfolio found, starting from the default dataset");
                (seed.clone(), true)
            }
            Err(e) => {
                warn!("{}. Starting from the default dataset", e);
                (seed.clone(), true)
            }
        };

        let today = clock.today();
        let derived = Arc::new(recompute(&snapshot, &settings, today));
        let store = PortfolioStore {
            repository,
            event_sink,
            clock,
            seed,
            snapshot,
            settings,
            derived,
        };
        store.event_sink.notify(&[
            PortfolioEvent::Loaded { from_seed },
            store.recomputed_event(),
        ]);
        store
    }

    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    pub fn settings(&self) -> &PortfolioSettings {
        &self.settings
    }

    /// Latest derived portfolio. Superseded, never modified, by later edits.
    pub fn derived(&self) -> Arc<DerivedPortfolio> {
        Arc::clone(&self.derived)
    }

    collection_edits!(
        CollectionKind::Equities,
        equities,
        EquityPosition,
        add_equity,
        update_equity,
        delete_equity,
        set_equities
    );

    collection_edits!(
        CollectionKind::IncomeFunds,
        income_funds,
        IncomeFundPosition,
        add_income_fund,
        update_income_fund,
        delete_income_fund,
        set_income_funds
    );

    collection_edits!(
        CollectionKind::IntlEquities,
        intl_equities,
        EquityPosition,
        add_intl_equity,
        update_intl_equity,
        delete_intl_equity,
        set_intl_equities
    );

    collection_edits!(
        CollectionKind::FixedIncome,
        fixed_income,
        FixedIncomeHolding,
        add_fixed_income,
        update_fixed_income,
        delete_fixed_income,
        set_fixed_income
    );

    collection_edits!(
        CollectionKind::RealAssets,
        real_assets,
        RealAsset,
        add_real_asset,
        update_real_asset,
        delete_real_asset,
        set_real_assets
    );

    collection_edits!(
        CollectionKind::Dividends,
        dividends,
        DividendEvent,
        add_dividend,
        update_dividend,
        delete_dividend,
        set_dividends
    );

    collection_edits!(
        CollectionKind::Watchlist,
        watchlist,
        WatchlistEntry,
        add_watchlist_entry,
        update_watchlist_entry,
        delete_watchlist_entry,
        set_watchlist
    );

    collection_edits!(
        CollectionKind::AllocationTargets,
        allocation_targets,
        AllocationTarget,
        add_allocation_target,
        update_allocation_target,
        delete_allocation_target,
        set_allocation_targets
    );

    collection_edits!(
        CollectionKind::AccumulationGoals,
        accumulation_goals,
        AccumulationGoal,
        add_goal,
        update_goal,
        delete_goal,
        set_goals
    );

    // ==================== Settings ====================
    // Settings shape the derived layer only; they are not persisted here.

    pub fn set_currency_display(&mut self, display: CurrencyDisplay) {
        self.update_settings(|settings| settings.currency_display = display);
    }

    pub fn set_broker_filter(&mut self, filter: BrokerFilter) {
        self.update_settings(|settings| settings.broker_filter = filter);
    }

    /// Rejects zero and negative rates, leaving the current rate in place.
    pub fn set_exchange_rate(&mut self, rate: Decimal) -> Result<()> {
        let rate = ExchangeRate::new(rate)?;
        self.update_settings(|settings| settings.exchange_rate = rate);
        Ok(())
    }

    pub fn set_indicator_thresholds(&mut self, thresholds: IndicatorThresholds) {
        self.update_settings(|settings| settings.indicator_thresholds = thresholds);
    }

    pub fn set_settings(&mut self, settings: PortfolioSettings) {
        self.update_settings(|current| *current = settings);
    }

    // ==================== Lifecycle ====================

    /// Restores the seed and clears persisted state.
    pub fn reset(&mut self) {
        self.snapshot = self.seed.clone();
        let mut events = vec![PortfolioEvent::Reset];
        if let Err(e) = self.repository.clear_snapshot() {
            warn!("Failed to clear persisted portfolio: {}", e);
            events.push(PortfolioEvent::persist_failed(e.to_string()));
        }
        info!("Portfolio reset to the default dataset");
        self.recompute_and_emit(events);
    }

    /// Recomputes against the current date without changing any state.
    pub fn refresh(&mut self) {
        self.recompute_and_emit(Vec::new());
    }

    /// Splits `amount` toward the classes furthest below their targets.
    pub fn suggest_contribution(&self, amount: Decimal) -> ContributionPlan {
        suggest_contribution(
            amount,
            &self.derived.allocation,
            &self.snapshot.allocation_targets,
        )
    }

    // ==================== Internals ====================

    fn apply<T>(
        &mut self,
        kind: CollectionKind,
        next: std::result::Result<Vec<T>, EditRejection>,
        assign: impl FnOnce(&mut PortfolioSnapshot, Vec<T>),
    ) -> bool {
        match next {
            Ok(items) => {
                self.commit(kind, |snapshot| assign(snapshot, items));
                true
            }
            Err(rejection) => {
                debug!("Dropped edit to {}: {}", kind, rejection);
                false
            }
        }
    }

    fn commit(&mut self, kind: CollectionKind, mutate: impl FnOnce(&mut PortfolioSnapshot)) {
        mutate(&mut self.snapshot);
        self.snapshot.normalize_currencies();

        let mut events = vec![PortfolioEvent::collection_changed(kind)];
        if let Err(e) = self.persist() {
            warn!("Failed to persist portfolio after editing {}: {}", kind, e);
            events.push(PortfolioEvent::persist_failed(e.to_string()));
        }
        self.recompute_and_emit(events);
    }

    fn persist(&self) -> Result<()> {
        let document = encode_snapshot(&self.snapshot)?;
        self.repository.save_snapshot(&document)
    }

    fn update_settings(&mut self, change: impl FnOnce(&mut PortfolioSettings)) {
        change(&mut self.settings);
        self.recompute_and_emit(vec![PortfolioEvent::SettingsChanged]);
    }

    fn recompute_and_emit(&mut self, mut events: Vec<PortfolioEvent>) {
        let today = self.clock.today();
        self.derived = Arc::new(recompute(&self.snapshot, &self.settings, today));
        events.push(self.recomputed_event());
        self.event_sink.notify(&events);
    }

    fn recomputed_event(&self) -> PortfolioEvent {
        PortfolioEvent::Recomputed {
            as_of: self.derived.as_of,
            total_patrimony: self.derived.patrimony.total,
        }
    }
}
