//! Dashboard events module.
//!
//! Provides dashboard event types and the sink trait for notifying readers
//! after each published view. Host applications implement the sink to
//! translate events into platform-specific actions (re-render, telemetry).

mod dashboard_event;
mod sink;

pub use dashboard_event::*;
pub use sink::*;
