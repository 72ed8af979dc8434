//! Dashboard event types.

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardStatus;
use crate::portfolio::Category;

/// Dashboard events emitted after each accepted state change.
///
/// These events describe what happened to the published view. Host
/// applications subscribe through a [`DashboardEventSink`](super::DashboardEventSink)
/// and react to them (typically by re-reading the view).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// The availability status changed.
    StatusChanged {
        old_status: DashboardStatus,
        new_status: DashboardStatus,
    },

    /// A new view was published. `revision` identifies it; readers treat
    /// each revision as immutable.
    SnapshotPublished { revision: u64 },

    /// A category source settled with a failure. The category's values are
    /// zeroed in the published view and must not be taken as authoritative.
    SourceDegraded {
        category: Category,
        /// The failure message reported by the source
        message: String,
    },
}

impl DashboardEvent {
    /// Creates a StatusChanged event.
    pub fn status_changed(old_status: DashboardStatus, new_status: DashboardStatus) -> Self {
        Self::StatusChanged {
            old_status,
            new_status,
        }
    }

    /// Creates a SnapshotPublished event.
    pub fn snapshot_published(revision: u64) -> Self {
        Self::SnapshotPublished { revision }
    }

    /// Creates a SourceDegraded event.
    pub fn source_degraded(category: Category, message: impl Into<String>) -> Self {
        Self::SourceDegraded {
            category,
            message: message.into(),
        }
    }
}
