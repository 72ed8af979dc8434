//! Per-category normalizers.
//!
//! Each normalizer converts one category's raw source records into a
//! [`CategoryTotal`]. They share one defaulting rule: input that has not
//! resolved yields a settled-empty total, and malformed records are skipped
//! with a warning instead of failing the whole category.

use log::warn;
use rust_decimal::Decimal;
use thiserror::Error;

use stakefolio_chain_data::{BondedPosition, UnbondingRequest, WithdrawableRecord};

use super::category::Category;
use super::portfolio_model::{CategoryTotal, TokenAmount};

/// Why a raw record was rejected during normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has no token symbol")]
    MissingSymbol,

    #[error("record has an empty token symbol")]
    EmptySymbol,

    #[error("record for '{symbol}' has no amount")]
    MissingAmount { symbol: String },

    #[error("record for '{symbol}' has negative amount {amount}")]
    NegativeAmount { symbol: String, amount: Decimal },
}

/// Validate one raw record into a breakdown entry.
fn record_entry(
    token_symbol: Option<&str>,
    amount: Option<Decimal>,
) -> Result<TokenAmount, RecordError> {
    let symbol = token_symbol.ok_or(RecordError::MissingSymbol)?;
    if symbol.is_empty() {
        return Err(RecordError::EmptySymbol);
    }
    let amount = amount.ok_or_else(|| RecordError::MissingAmount {
        symbol: symbol.to_string(),
    })?;
    if amount < Decimal::ZERO {
        return Err(RecordError::NegativeAmount {
            symbol: symbol.to_string(),
            amount,
        });
    }
    Ok(TokenAmount::new(symbol, amount))
}

fn collect_entries<'a, I>(category: Category, records: I) -> CategoryTotal
where
    I: Iterator<Item = (Option<&'a str>, Option<Decimal>)>,
{
    let mut breakdown = Vec::new();
    for (symbol, amount) in records {
        match record_entry(symbol, amount) {
            Ok(entry) => breakdown.push(entry),
            Err(error) => {
                warn!("Skipping {} record: {}", category.label(), error);
            }
        }
    }
    CategoryTotal::new(category, breakdown)
}

/// Normalize bonded positions. Unresolved input yields an empty total.
pub fn normalize_bonded(positions: Option<&[BondedPosition]>) -> CategoryTotal {
    match positions {
        Some(positions) => collect_entries(
            Category::Bonded,
            positions
                .iter()
                .map(|position| (position.token_symbol.as_deref(), position.amount)),
        ),
        None => CategoryTotal::empty(Category::Bonded),
    }
}

/// Normalize liquid balances against the resolved symbol order.
///
/// Balances pair positionally with `symbols`. A missing balance (a `None`
/// entry, or a balances slice shorter than the symbol list) counts as zero,
/// so a resolved liquid source always yields one entry per symbol.
pub fn normalize_liquid(
    balances: Option<&[Option<Decimal>]>,
    symbols: &[String],
) -> CategoryTotal {
    match balances {
        Some(balances) => {
            let breakdown = symbols
                .iter()
                .enumerate()
                .map(|(idx, symbol)| {
                    let amount = balances.get(idx).copied().flatten().unwrap_or(Decimal::ZERO);
                    let amount = if amount < Decimal::ZERO {
                        warn!(
                            "Skipping negative liquid balance {} for {}; using zero",
                            amount, symbol
                        );
                        Decimal::ZERO
                    } else {
                        amount
                    };
                    TokenAmount::new(symbol.clone(), amount)
                })
                .collect();
            CategoryTotal::new(Category::Liquid, breakdown)
        }
        None => CategoryTotal::empty(Category::Liquid),
    }
}

/// Normalize unbonding requests. Each request stays a distinct breakdown
/// entry even when symbols repeat; requests differ by release time, which
/// the source tracks and the total does not use.
pub fn normalize_unbonding(requests: Option<&[UnbondingRequest]>) -> CategoryTotal {
    match requests {
        Some(requests) => collect_entries(
            Category::Unbonding,
            requests
                .iter()
                .map(|request| (request.token_symbol.as_deref(), request.amount)),
        ),
        None => CategoryTotal::empty(Category::Unbonding),
    }
}

/// Normalize withdrawable records. Unresolved input yields an empty total.
pub fn normalize_withdrawable(records: Option<&[WithdrawableRecord]>) -> CategoryTotal {
    match records {
        Some(records) => collect_entries(
            Category::Withdrawable,
            records
                .iter()
                .map(|record| (record.token_symbol.as_deref(), record.amount)),
        ),
        None => CategoryTotal::empty(Category::Withdrawable),
    }
}
