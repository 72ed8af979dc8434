//! Pure aggregation over the latest known per-category inputs.

use rust_decimal::Decimal;

use stakefolio_chain_data::{BondedPosition, UnbondingRequest, WithdrawableRecord};

use super::normalizer::{
    normalize_bonded, normalize_liquid, normalize_unbonding, normalize_withdrawable,
};
use super::portfolio_model::PortfolioSnapshot;

/// Recompute the full snapshot from the latest known value of every
/// category source.
///
/// Pure function of its inputs: identical inputs produce an equal snapshot,
/// regardless of the order in which the sources originally settled. `None`
/// marks a source that has not resolved; its category settles empty rather
/// than blocking the others. Each normalizer sees only its own source's
/// records, so categories never mix inputs.
pub fn recompute(
    bonded: Option<&[BondedPosition]>,
    liquid_balances: Option<&[Option<Decimal>]>,
    liquid_symbols: &[String],
    unbonding: Option<&[UnbondingRequest]>,
    withdrawable: Option<&[WithdrawableRecord]>,
) -> PortfolioSnapshot {
    let snapshot = PortfolioSnapshot::new([
        normalize_liquid(liquid_balances, liquid_symbols),
        normalize_bonded(bonded),
        normalize_unbonding(unbonding),
        normalize_withdrawable(withdrawable),
    ]);
    debug_assert!(snapshot.is_consistent());
    snapshot
}
