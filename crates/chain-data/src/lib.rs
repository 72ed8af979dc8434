//! Stakefolio Chain Data Crate
//!
//! This crate defines the boundary between the aggregation core and the
//! on-chain data sources it consumes. It contains no retrieval logic:
//! wallets, RPC clients, and indexers live behind the traits defined here,
//! and the core only sees their typed results.
//!
//! # Overview
//!
//! The chain data crate provides:
//! - Raw record models for the four portfolio categories (liquid balances,
//!   bonded positions, unbonding requests, withdrawable records)
//! - Wallet session and per-chain bonding configuration models
//! - The [`SourceState`] settlement cell shared by every asynchronous source
//! - Source traits implemented by concrete chain clients
//!
//! # Core Types
//!
//! - [`WalletSession`] - Wallet connection state (disconnected or an address)
//! - [`ChainConfig`] - Per-chain bonding configuration (eligible tokens)
//! - [`BondedPosition`] / [`UnbondingRequest`] / [`WithdrawableRecord`] -
//!   Raw per-category records as returned by chain queries
//! - [`SourceState`] - Pending / Resolved / Failed settlement state
//! - [`SourceError`] - Error type returned by all source operations

pub mod errors;
pub mod models;
pub mod source;

// Re-export all public types from models
pub use models::{
    BondedPosition, BondingTokenConfig, ChainConfig, SourceState, UnbondingRequest, WalletSession,
    WithdrawableRecord,
};

// Re-export source traits
pub use source::{
    BondedSource, ConfigProvider, LiquidBalanceSource, PriceSource, SessionProvider,
    UnbondingSource, WithdrawableSource,
};

pub use errors::SourceError;
