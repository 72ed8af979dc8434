//! Dashboard view model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::{Category, PortfolioSnapshot};

/// Availability of the published dashboard view.
///
/// The status only ever moves along `Disconnected -> Loading -> Ready` while
/// a session lasts; any session or symbol change drops it back down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardStatus {
    /// No wallet session. The snapshot is the empty placeholder.
    #[default]
    Disconnected,

    /// A wallet is connected and at least one category source has not
    /// settled yet.
    Loading,

    /// A wallet is connected and every category source has settled. Failed
    /// sources count as settled; check `degraded` for them.
    Ready,
}

/// The immutable view published after every accepted state change.
///
/// Readers always receive a complete view; there is no partially updated
/// state to observe. Each published view carries a revision one higher than
/// the previous one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Availability of the data in this view.
    pub status: DashboardStatus,

    /// Aggregated per-category totals, in fixed display order.
    pub snapshot: PortfolioSnapshot,

    /// Last known reference token price, if one was ever received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_price: Option<Decimal>,

    /// Categories whose source settled with a failure. Their totals are
    /// zeroed in `snapshot` and must not be taken as authoritative.
    pub degraded: Vec<Category>,

    /// Counter identifying this view, starting at 0 and increasing by one
    /// per published view.
    pub revision: u64,
}

impl DashboardView {
    /// The view published before any update has been accepted.
    pub fn initial() -> Self {
        Self {
            status: DashboardStatus::Disconnected,
            snapshot: PortfolioSnapshot::empty(),
            reference_price: None,
            degraded: Vec::new(),
            revision: 0,
        }
    }

    /// Returns true when every category source behind this view has settled.
    pub fn is_ready(&self) -> bool {
        self.status == DashboardStatus::Ready
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_initial_view() {
        let view = DashboardView::initial();
        assert_eq!(view.status, DashboardStatus::Disconnected);
        assert_eq!(view.snapshot, PortfolioSnapshot::empty());
        assert_eq!(view.reference_price, None);
        assert!(view.degraded.is_empty());
        assert_eq!(view.revision, 0);
        assert!(!view.is_ready());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&DashboardStatus::Disconnected).unwrap();
        assert_eq!(json, "\"disconnected\"");
        let json = serde_json::to_string(&DashboardStatus::Ready).unwrap();
        assert_eq!(json, "\"ready\"");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let mut view = DashboardView::initial();
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"revision\":0"));
        // An unknown price is omitted rather than serialized as null
        assert!(!json.contains("referencePrice"));

        view.reference_price = Some(dec!(0.0123));
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("referencePrice"));
    }
}
