//! Chain data source abstractions.
//!
//! This module defines the traits that concrete chain clients implement.
//! The aggregation core depends only on these traits; which wallet SDK,
//! RPC endpoint, or indexer sits behind them is invisible to it.
//!
//! The four category sources are deliberately separate traits even though a
//! single client will often implement several of them: each category settles
//! independently, and the core must be able to consume them in any order.

mod traits;

pub use traits::{
    BondedSource, ConfigProvider, LiquidBalanceSource, PriceSource, SessionProvider,
    UnbondingSource, WithdrawableSource,
};
