//! Stakefolio Core - Portfolio aggregation for bonding dashboards.
//!
//! This crate merges independently fetched per-category holdings (liquid,
//! bonded, unbonding, withdrawable) into one consistent snapshot. It is
//! chain-agnostic: data retrieval lives behind the traits defined in the
//! `stakefolio-chain-data` crate, and this crate only consumes their typed
//! results.

pub mod constants;
pub mod dashboard;
pub mod events;
pub mod portfolio;
pub mod symbols;

// Re-export common types from portfolio and dashboard modules
pub use dashboard::*;
pub use portfolio::*;

// Re-export the symbol set types
pub use symbols::{SymbolSet, SymbolSetResolver};
