//! Unit tests for the per-category normalizers.

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stakefolio_chain_data::{BondedPosition, UnbondingRequest, WithdrawableRecord};

fn symbols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// Bonded
// ============================================================================

#[test]
fn test_bonded_sums_and_keeps_duplicate_symbols_separate() {
    let positions = vec![
        BondedPosition::new("ampWHALE", dec!(3)),
        BondedPosition::new("ampWHALE", dec!(7)),
    ];

    let total = normalize_bonded(Some(&positions));

    assert_eq!(total.category, Category::Bonded);
    assert_eq!(total.total, dec!(10));
    assert_eq!(total.breakdown.len(), 2);
    assert_eq!(total.breakdown[0].amount, dec!(3));
    assert_eq!(total.breakdown[1].amount, dec!(7));
}

#[test]
fn test_bonded_unresolved_yields_empty_total() {
    let total = normalize_bonded(None);

    assert_eq!(total.total, Decimal::ZERO);
    assert!(total.breakdown.is_empty());
}

#[test]
fn test_bonded_resolved_empty_matches_unresolved_shape() {
    let total = normalize_bonded(Some(&[]));

    assert_eq!(total.total, Decimal::ZERO);
    assert!(total.breakdown.is_empty());
}

#[test]
fn test_bonded_skips_malformed_records() {
    let positions = vec![
        BondedPosition::new("ampWHALE", dec!(5)),
        BondedPosition {
            token_symbol: None,
            amount: Some(dec!(100)),
        },
        BondedPosition {
            token_symbol: Some("bWHALE".to_string()),
            amount: None,
        },
        BondedPosition {
            token_symbol: Some(String::new()),
            amount: Some(dec!(2)),
        },
        BondedPosition::new("bWHALE", dec!(-4)),
    ];

    let total = normalize_bonded(Some(&positions));

    // Only the first record is well-formed.
    assert_eq!(total.breakdown.len(), 1);
    assert_eq!(total.total, dec!(5));
    assert_eq!(total.breakdown[0].token_symbol, "ampWHALE");
}

// ============================================================================
// Liquid
// ============================================================================

#[test]
fn test_liquid_pairs_balances_with_symbols_positionally() {
    let symbols = symbols(&["ampWHALE", "bWHALE", "WHALE"]);
    let balances = vec![Some(dec!(10)), None, Some(dec!(5))];

    let total = normalize_liquid(Some(&balances), &symbols);

    assert_eq!(total.category, Category::Liquid);
    assert_eq!(total.total, dec!(15));
    assert_eq!(total.breakdown.len(), 3);
    assert_eq!(total.breakdown[0].token_symbol, "ampWHALE");
    assert_eq!(total.breakdown[0].amount, dec!(10));
    assert_eq!(total.breakdown[1].token_symbol, "bWHALE");
    assert_eq!(total.breakdown[1].amount, Decimal::ZERO);
    assert_eq!(total.breakdown[2].token_symbol, "WHALE");
    assert_eq!(total.breakdown[2].amount, dec!(5));
}

#[test]
fn test_liquid_short_balance_slice_defaults_to_zero() {
    let symbols = symbols(&["ampWHALE", "bWHALE", "WHALE"]);
    let balances = vec![Some(dec!(2))];

    let total = normalize_liquid(Some(&balances), &symbols);

    assert_eq!(total.breakdown.len(), 3);
    assert_eq!(total.breakdown[1].amount, Decimal::ZERO);
    assert_eq!(total.breakdown[2].amount, Decimal::ZERO);
    assert_eq!(total.total, dec!(2));
}

#[test]
fn test_liquid_extra_balances_are_ignored() {
    let symbols = symbols(&["WHALE"]);
    let balances = vec![Some(dec!(1)), Some(dec!(99))];

    let total = normalize_liquid(Some(&balances), &symbols);

    assert_eq!(total.breakdown.len(), 1);
    assert_eq!(total.total, dec!(1));
}

#[test]
fn test_liquid_negative_balance_counts_as_zero() {
    let symbols = symbols(&["ampWHALE", "WHALE"]);
    let balances = vec![Some(dec!(-3)), Some(dec!(4))];

    let total = normalize_liquid(Some(&balances), &symbols);

    assert_eq!(total.breakdown[0].amount, Decimal::ZERO);
    assert_eq!(total.total, dec!(4));
}

#[test]
fn test_liquid_unresolved_yields_empty_breakdown() {
    let symbols = symbols(&["ampWHALE", "WHALE"]);

    let total = normalize_liquid(None, &symbols);

    // Unresolved means no per-symbol entries at all, not zeroed entries.
    assert!(total.breakdown.is_empty());
    assert_eq!(total.total, Decimal::ZERO);
}

// ============================================================================
// Unbonding
// ============================================================================

#[test]
fn test_unbonding_requests_stay_distinct() {
    let requests = vec![
        UnbondingRequest::new("ampWHALE", dec!(1.5)),
        UnbondingRequest::new("ampWHALE", dec!(2.5)),
        UnbondingRequest::new("bWHALE", dec!(6)),
    ];

    let total = normalize_unbonding(Some(&requests));

    assert_eq!(total.category, Category::Unbonding);
    assert_eq!(total.breakdown.len(), 3);
    assert_eq!(total.total, dec!(10));
}

#[test]
fn test_unbonding_release_time_does_not_affect_total() {
    let release = chrono::Utc::now();
    let requests = vec![
        UnbondingRequest::releasing_at("WHALE", dec!(2), release),
        UnbondingRequest::new("WHALE", dec!(3)),
    ];

    let total = normalize_unbonding(Some(&requests));

    assert_eq!(total.total, dec!(5));
}

// ============================================================================
// Withdrawable
// ============================================================================

#[test]
fn test_withdrawable_sums_records() {
    let records = vec![
        WithdrawableRecord::new("ampWHALE", dec!(0.25)),
        WithdrawableRecord::new("bWHALE", dec!(0.75)),
    ];

    let total = normalize_withdrawable(Some(&records));

    assert_eq!(total.category, Category::Withdrawable);
    assert_eq!(total.total, dec!(1));
    assert_eq!(total.breakdown.len(), 2);
}

#[test]
fn test_withdrawable_skips_record_without_amount() {
    let records = vec![
        WithdrawableRecord::new("WHALE", dec!(9)),
        WithdrawableRecord {
            token_symbol: Some("bWHALE".to_string()),
            amount: None,
        },
    ];

    let total = normalize_withdrawable(Some(&records));

    assert_eq!(total.breakdown.len(), 1);
    assert_eq!(total.total, dec!(9));
}
