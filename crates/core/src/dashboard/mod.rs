//! Dashboard module.
//!
//! This module provides the published dashboard view, the state service that
//! merges per-category source updates into it, and the refresh driver that
//! fetches the sources.

mod dashboard_model;
mod dashboard_service;
mod refresher;

pub use dashboard_model::*;
pub use dashboard_service::*;
pub use refresher::*;
