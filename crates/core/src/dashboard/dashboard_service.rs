//! Dashboard state cell and update service.
//!
//! All mutations funnel through [`DashboardService`], which owns the state
//! behind a single lock. Each accepted update recomputes the snapshot and
//! publishes a complete [`DashboardView`]; readers only ever observe whole
//! views, never a half-applied update.

use std::sync::{Arc, RwLock};

use log::{debug, warn};
use rust_decimal::Decimal;

use stakefolio_chain_data::{
    BondedPosition, SourceError, SourceState, UnbondingRequest, WalletSession, WithdrawableRecord,
};

use super::dashboard_model::{DashboardStatus, DashboardView};
use crate::events::{DashboardEvent, DashboardEventSink};
use crate::portfolio::{recompute, Category};
use crate::symbols::SymbolSet;

/// Everything the dashboard knows, guarded by the service lock.
struct DashboardState {
    session: WalletSession,
    symbols: SymbolSet,
    bonded: SourceState<Vec<BondedPosition>>,
    liquid: SourceState<Vec<Option<Decimal>>>,
    unbonding: SourceState<Vec<UnbondingRequest>>,
    withdrawable: SourceState<Vec<WithdrawableRecord>>,
    reference_price: Option<Decimal>,
    view: DashboardView,
}

impl DashboardState {
    fn new() -> Self {
        Self {
            session: WalletSession::default(),
            symbols: SymbolSet::default(),
            bonded: SourceState::Pending,
            liquid: SourceState::Pending,
            unbonding: SourceState::Pending,
            withdrawable: SourceState::Pending,
            reference_price: None,
            view: DashboardView::initial(),
        }
    }

    /// Drop every category source back to pending. Used when the session
    /// changes and previously fetched data no longer belongs to the account.
    fn reset_sources(&mut self) {
        self.bonded = SourceState::Pending;
        self.liquid = SourceState::Pending;
        self.unbonding = SourceState::Pending;
        self.withdrawable = SourceState::Pending;
    }

    fn all_sources_settled(&self) -> bool {
        self.bonded.is_settled()
            && self.liquid.is_settled()
            && self.unbonding.is_settled()
            && self.withdrawable.is_settled()
    }

    fn status(&self) -> DashboardStatus {
        if !self.session.is_connected() {
            DashboardStatus::Disconnected
        } else if self.all_sources_settled() {
            DashboardStatus::Ready
        } else {
            DashboardStatus::Loading
        }
    }

    /// Categories whose source settled with a failure, in display order.
    fn degraded(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| match category {
                Category::Liquid => self.liquid.is_failed(),
                Category::Bonded => self.bonded.is_failed(),
                Category::Unbonding => self.unbonding.is_failed(),
                Category::Withdrawable => self.withdrawable.is_failed(),
            })
            .collect()
    }

    /// Recompute the snapshot from the current cells and replace the
    /// published view, appending the events the change produced.
    fn publish(&mut self, events: &mut Vec<DashboardEvent>) {
        let snapshot = recompute(
            self.bonded.value().map(Vec::as_slice),
            self.liquid.value().map(Vec::as_slice),
            self.symbols.as_slice(),
            self.unbonding.value().map(Vec::as_slice),
            self.withdrawable.value().map(Vec::as_slice),
        );

        let old_status = self.view.status;
        let new_status = self.status();
        let revision = self.view.revision + 1;

        self.view = DashboardView {
            status: new_status,
            snapshot,
            reference_price: self.reference_price,
            degraded: self.degraded(),
            revision,
        };

        if new_status != old_status {
            events.push(DashboardEvent::status_changed(old_status, new_status));
        }
        events.push(DashboardEvent::snapshot_published(revision));
    }
}

/// Service merging per-category source updates into one published view.
///
/// The service is the single writer; any number of readers may call
/// [`view`](Self::view) concurrently. Update methods are synchronous and do
/// no I/O, so the lock is only ever held for the recompute itself.
pub struct DashboardService {
    state: RwLock<DashboardState>,
    event_sink: Arc<dyn DashboardEventSink>,
}

impl DashboardService {
    /// Creates a new DashboardService instance publishing the initial
    /// disconnected view.
    pub fn new(event_sink: Arc<dyn DashboardEventSink>) -> Self {
        Self {
            state: RwLock::new(DashboardState::new()),
            event_sink,
        }
    }

    /// The currently published view.
    pub fn view(&self) -> DashboardView {
        self.state.read().unwrap().view.clone()
    }

    /// Status of the currently published view.
    pub fn status(&self) -> DashboardStatus {
        self.state.read().unwrap().view.status
    }

    /// Replace the wallet session.
    ///
    /// Any session change, including a switch straight from one account to
    /// another, drops all category sources back to pending; data fetched for
    /// the previous account never appears in a later account's view. An
    /// unchanged session publishes nothing.
    pub fn set_session(&self, session: WalletSession) {
        let mut events = Vec::new();
        {
            let mut state = self.state.write().unwrap();
            if state.session == session {
                return;
            }
            debug!(
                "Wallet session changed (connected: {})",
                session.is_connected()
            );
            state.session = session;
            state.reset_sources();
            state.publish(&mut events);
        }
        self.event_sink.emit_batch(events);
    }

    /// Replace the tracked symbol set.
    ///
    /// Liquid balances are positional against the symbol list, so a value
    /// fetched for the old list no longer lines up; the liquid source drops
    /// back to pending until it is re-fetched. An unchanged set publishes
    /// nothing.
    pub fn set_symbols(&self, symbols: SymbolSet) {
        let mut events = Vec::new();
        {
            let mut state = self.state.write().unwrap();
            if state.symbols == symbols {
                return;
            }
            debug!("Tracked symbols changed: {:?}", symbols.as_slice());
            state.symbols = symbols;
            state.liquid = SourceState::Pending;
            state.publish(&mut events);
        }
        self.event_sink.emit_batch(events);
    }

    /// Record the latest reference token price.
    ///
    /// The price is account independent and display only. It never gates
    /// availability and survives session changes; an unchanged price
    /// publishes nothing.
    pub fn set_reference_price(&self, price: Decimal) {
        let mut events = Vec::new();
        {
            let mut state = self.state.write().unwrap();
            if state.reference_price == Some(price) {
                return;
            }
            state.reference_price = Some(price);
            state.publish(&mut events);
        }
        self.event_sink.emit_batch(events);
    }

    /// Settle the bonded source for the given account address.
    pub fn apply_bonded(&self, address: &str, result: Result<Vec<BondedPosition>, SourceError>) {
        self.apply_source(address, Category::Bonded, result, |state, cell| {
            state.bonded = cell
        });
    }

    /// Settle the liquid balance source for the given account address.
    ///
    /// Balances are positional against the symbol set current at fetch time.
    pub fn apply_liquid(&self, address: &str, result: Result<Vec<Option<Decimal>>, SourceError>) {
        self.apply_source(address, Category::Liquid, result, |state, cell| {
            state.liquid = cell
        });
    }

    /// Settle the unbonding source for the given account address.
    pub fn apply_unbonding(
        &self,
        address: &str,
        result: Result<Vec<UnbondingRequest>, SourceError>,
    ) {
        self.apply_source(address, Category::Unbonding, result, |state, cell| {
            state.unbonding = cell
        });
    }

    /// Settle the withdrawable source for the given account address.
    pub fn apply_withdrawable(
        &self,
        address: &str,
        result: Result<Vec<WithdrawableRecord>, SourceError>,
    ) {
        self.apply_source(address, Category::Withdrawable, result, |state, cell| {
            state.withdrawable = cell
        });
    }

    /// Shared settle path: discard stale updates, record failures, assign
    /// the new cell value and publish.
    fn apply_source<T>(
        &self,
        address: &str,
        category: Category,
        result: Result<T, SourceError>,
        assign: impl FnOnce(&mut DashboardState, SourceState<T>),
    ) {
        let mut events = Vec::new();
        {
            let mut state = self.state.write().unwrap();
            if state.session.address() != Some(address) {
                debug!(
                    "Discarding {} update for stale address {}",
                    category.label(),
                    address
                );
                return;
            }
            if let Err(error) = &result {
                warn!("{} source failed: {}", category.label(), error);
                events.push(DashboardEvent::source_degraded(category, error.to_string()));
            }
            assign(&mut state, SourceState::from_result(result));
            state.publish(&mut events);
        }
        self.event_sink.emit_batch(events);
    }
}
