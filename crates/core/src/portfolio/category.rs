use serde::{Deserialize, Serialize};

/// Portfolio category.
///
/// The four categories are mutually exclusive: a token amount belongs to
/// exactly one of them at any time. The enum order is the fixed display
/// order; [`Category::ALL`] and [`index`](Category::index) rely on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Spendable wallet balances
    Liquid,
    /// Tokens actively bonded to earn rewards
    Bonded,
    /// Tokens in the post-unbond cooldown period
    Unbonding,
    /// Tokens whose cooldown has elapsed and can be claimed
    Withdrawable,
}

/// The action a display offers for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryAction {
    Buy,
    Bond,
    Unbond,
    Withdraw,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Liquid,
        Category::Bonded,
        Category::Unbonding,
        Category::Withdrawable,
    ];

    /// Position of this category in the display order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Liquid => "Liquid",
            Category::Bonded => "Bonded",
            Category::Unbonding => "Unbonding",
            Category::Withdrawable => "Withdrawable",
        }
    }

    /// Chart color associated with this category.
    pub fn color(self) -> &'static str {
        match self {
            Category::Liquid => "#244228",
            Category::Bonded => "#7CFB7D",
            Category::Unbonding => "#3273F6",
            Category::Withdrawable => "#173E84",
        }
    }

    /// The action a display offers for this category.
    pub fn action(self) -> CategoryAction {
        match self {
            Category::Liquid => CategoryAction::Buy,
            Category::Bonded => CategoryAction::Bond,
            Category::Unbonding => CategoryAction::Unbond,
            Category::Withdrawable => CategoryAction::Withdraw,
        }
    }
}
