use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// One token's contribution to a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    /// Token symbol
    pub token_symbol: String,

    /// Amount in display units; never negative
    pub amount: Decimal,
}

impl TokenAmount {
    pub fn new(token_symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            token_symbol: token_symbol.into(),
            amount,
        }
    }
}

/// Aggregated holdings of one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// The category these holdings belong to
    pub category: Category,

    /// Sum of the breakdown amounts
    pub total: Decimal,

    /// Per-token entries in source order. Entries with equal symbols stay
    /// separate; the aggregation never merges them.
    pub breakdown: Vec<TokenAmount>,
}

impl CategoryTotal {
    /// Build a category total. `total` is computed from the breakdown, so
    /// the total/breakdown invariant holds by construction.
    pub fn new(category: Category, breakdown: Vec<TokenAmount>) -> Self {
        let total = breakdown.iter().map(|entry| entry.amount).sum();
        Self {
            category,
            total,
            breakdown,
        }
    }

    /// A settled-empty category: zero total, no breakdown.
    pub fn empty(category: Category) -> Self {
        Self::new(category, Vec::new())
    }

    /// Returns true when `total` equals the sum of the breakdown amounts.
    pub fn is_consistent(&self) -> bool {
        self.total
            == self
                .breakdown
                .iter()
                .map(|entry| entry.amount)
                .sum::<Decimal>()
    }
}

/// Immutable aggregation result covering all four categories.
///
/// The categories appear in fixed display order ([`Category::ALL`]),
/// exactly one entry each. A new snapshot value is produced on every
/// recomputation; published snapshots are never mutated in place, so two
/// snapshots built from identical inputs compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    categories: [CategoryTotal; 4],
}

impl PortfolioSnapshot {
    /// Build a snapshot from the four category totals, given in
    /// [`Category::ALL`] order.
    pub fn new(categories: [CategoryTotal; 4]) -> Self {
        debug_assert!(categories
            .iter()
            .zip(Category::ALL)
            .all(|(entry, category)| entry.category == category));
        Self { categories }
    }

    /// A snapshot with every category settled empty.
    pub fn empty() -> Self {
        Self::new(Category::ALL.map(CategoryTotal::empty))
    }

    /// All four category totals in display order.
    pub fn categories(&self) -> &[CategoryTotal; 4] {
        &self.categories
    }

    /// The totals for one category.
    pub fn category(&self, category: Category) -> &CategoryTotal {
        &self.categories[category.index()]
    }

    /// Returns true when every category total matches its breakdown sum.
    pub fn is_consistent(&self) -> bool {
        self.categories.iter().all(CategoryTotal::is_consistent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_total_computes_total() {
        let total = CategoryTotal::new(
            Category::Bonded,
            vec![
                TokenAmount::new("ampWHALE", dec!(3)),
                TokenAmount::new("bWHALE", dec!(7.5)),
            ],
        );
        assert_eq!(total.total, dec!(10.5));
        assert!(total.is_consistent());
    }

    #[test]
    fn test_empty_category_total() {
        let total = CategoryTotal::empty(Category::Unbonding);
        assert_eq!(total.total, Decimal::ZERO);
        assert!(total.breakdown.is_empty());
        assert!(total.is_consistent());
    }

    #[test]
    fn test_empty_snapshot_covers_all_categories_in_order() {
        let snapshot = PortfolioSnapshot::empty();
        let categories: Vec<Category> = snapshot
            .categories()
            .iter()
            .map(|entry| entry.category)
            .collect();
        assert_eq!(categories, Category::ALL);
        assert!(snapshot.is_consistent());
    }

    #[test]
    fn test_category_lookup() {
        let snapshot = PortfolioSnapshot::empty();
        assert_eq!(
            snapshot.category(Category::Withdrawable).category,
            Category::Withdrawable
        );
    }

    #[test]
    fn test_token_amount_serializes_camel_case() {
        let entry = TokenAmount::new("ampWHALE", dec!(12.25));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"tokenSymbol\":\"ampWHALE\""));
    }
}
