//! Dashboard event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DashboardEvent;

/// Trait for receiving dashboard events.
///
/// Implementations translate dashboard events into platform-specific actions.
/// The dashboard service emits events through this trait after each accepted
/// state change.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no disk writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect the published view (best-effort)
pub trait DashboardEventSink: Send + Sync {
    /// Emit a single dashboard event.
    fn emit(&self, event: DashboardEvent);

    /// Emit multiple dashboard events.
    ///
    /// Default implementation calls `emit()` for each event.
    /// Implementations may override for batch optimization.
    fn emit_batch(&self, events: Vec<DashboardEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDashboardEventSink;

impl DashboardEventSink for NoOpDashboardEventSink {
    fn emit(&self, _event: DashboardEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDashboardEventSink {
    events: Arc<Mutex<Vec<DashboardEvent>>>,
}

impl MockDashboardEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DashboardEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DashboardEventSink for MockDashboardEventSink {
    fn emit(&self, event: DashboardEvent) {
        self.events.lock().unwrap().push(event);
    }
}
