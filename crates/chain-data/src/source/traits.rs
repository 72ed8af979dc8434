//! Source trait definitions.
//!
//! Each trait covers one independent input of the aggregation core. All
//! async sources return `Result<_, SourceError>`; a failure settles the
//! source for the current cycle rather than aborting anything.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::SourceError;
use crate::models::{
    BondedPosition, ChainConfig, UnbondingRequest, WalletSession, WithdrawableRecord,
};

/// Provides the current wallet session.
///
/// Session state is local to the host application, so this is the one
/// synchronous source. Implementations must be cheap to call; the core reads
/// it at the start of every refresh cycle.
pub trait SessionProvider: Send + Sync {
    /// The current wallet connection state.
    fn current_session(&self) -> WalletSession;
}

/// Provides the per-chain bonding configuration.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Fetch the bonding configuration for a (network, chain id) pair.
    ///
    /// Returns `Ok(None)` while the configuration has not been published or
    /// loaded yet; that is not an error and yields an empty token list
    /// downstream.
    async fn bonding_config(
        &self,
        network: &str,
        chain_id: &str,
    ) -> Result<Option<ChainConfig>, SourceError>;
}

/// Source of actively bonded positions.
#[async_trait]
pub trait BondedSource: Send + Sync {
    /// Fetch all bonded positions for the given account address.
    async fn bonded_positions(&self, address: &str)
        -> Result<Vec<BondedPosition>, SourceError>;
}

/// Source of liquid (spendable) token balances.
#[async_trait]
pub trait LiquidBalanceSource: Send + Sync {
    /// Fetch balances for the given symbols.
    ///
    /// # Arguments
    ///
    /// * `address` - The account to query
    /// * `symbols` - The symbols to look up, in the order the caller wants
    ///   them back
    ///
    /// # Returns
    ///
    /// A vector positionally parallel to `symbols`: element `i` is the
    /// balance of `symbols[i]`, or `None` when that single lookup failed or
    /// the account holds no such token. The vector may be shorter than
    /// `symbols` if trailing lookups were skipped; callers treat missing
    /// positions as zero.
    async fn balances(
        &self,
        address: &str,
        symbols: &[String],
    ) -> Result<Vec<Option<Decimal>>, SourceError>;
}

/// Source of pending unbonding requests.
#[async_trait]
pub trait UnbondingSource: Send + Sync {
    /// Fetch all unbonding requests for the given account address.
    ///
    /// Requests for the same token are returned as separate records; they
    /// differ by release time.
    async fn unbonding_requests(
        &self,
        address: &str,
    ) -> Result<Vec<UnbondingRequest>, SourceError>;
}

/// Source of withdrawable amounts.
#[async_trait]
pub trait WithdrawableSource: Send + Sync {
    /// Fetch all withdrawable records for the given account address.
    async fn withdrawable_records(
        &self,
        address: &str,
    ) -> Result<Vec<WithdrawableRecord>, SourceError>;
}

/// Source of the reference token price.
///
/// The price is display-only: the core forwards it untouched and never uses
/// it in category math.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current reference token price.
    async fn reference_price(&self) -> Result<Decimal, SourceError>;
}
