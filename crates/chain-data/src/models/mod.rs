//! Chain data models
//!
//! This module contains the value types exchanged with chain data sources:
//! - `session` - Wallet connection state (WalletSession)
//! - `config` - Per-chain bonding configuration (ChainConfig, BondingTokenConfig)
//! - `records` - Raw per-category records (BondedPosition, UnbondingRequest, WithdrawableRecord)
//! - `source_state` - Settlement state of an asynchronous source (SourceState)

mod config;
mod records;
mod session;
mod source_state;

pub use config::{BondingTokenConfig, ChainConfig};
pub use records::{BondedPosition, UnbondingRequest, WithdrawableRecord};
pub use session::WalletSession;
pub use source_state::SourceState;
