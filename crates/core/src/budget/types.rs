//! Budget data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending category classification.
///
/// The set is closed: storage may hold arbitrary labels, but the engine only
/// buckets amounts under these six. Parsing is the single boundary where
/// tolerance policies apply - aggregation drops labels that do not parse,
/// estimation falls back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Transit, fuel, tolls, fares.
    Transport,
    /// Accommodation.
    Lodging,
    /// Meals and drinks.
    Food,
    /// Tours, tickets, experiences.
    Activity,
    /// Souvenirs and purchases.
    Shopping,
    /// Everything else.
    Other,
}

impl ExpenseCategory {
    /// All categories, in bucket order.
    pub const ALL: [Self; 6] = [
        Self::Transport,
        Self::Lodging,
        Self::Food,
        Self::Activity,
        Self::Shopping,
        Self::Other,
    ];

    /// The storage label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Lodging => "lodging",
            Self::Food => "food",
            Self::Activity => "activity",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transport" => Ok(Self::Transport),
            "lodging" => Ok(Self::Lodging),
            "food" => Ok(Self::Food),
            "activity" => Ok(Self::Activity),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// Planned and actual amounts for one category bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmounts {
    /// Total planned amount.
    pub planned: Decimal,
    /// Total actual spend.
    pub actual: Decimal,
}

/// Planned-vs-actual summary for one travel plan.
///
/// Derived per call from a snapshot of stored records; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Sum of all planned amounts, including items whose category label does
    /// not parse into a bucket.
    pub total_planned: Decimal,
    /// Sum of all actual spend, same tolerance as `total_planned`.
    pub total_actual: Decimal,
    /// `total_planned - total_actual`; negative means over budget.
    pub remaining: Decimal,
    /// Per-category buckets. Every category is present, zeroed when unused.
    pub by_category: BTreeMap<ExpenseCategory, CategoryAmounts>,
}

/// A proposed reduction for one category's planned amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationSuggestion {
    /// Category to adjust.
    pub category: ExpenseCategory,
    /// Planned amount before the cut.
    pub current_planned: Decimal,
    /// Planned amount after the cut, never negative.
    pub suggested_planned: Decimal,
    /// Total proposed cut; `current_planned - reduction = suggested_planned`.
    pub reduction: Decimal,
    /// Human-readable rationale for the cut.
    pub reason: String,
}

/// Outcome of a reduction-planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Whether actual spend already exceeds the planned total.
    pub is_over_budget: bool,
    /// Amount by which actual spend exceeds the planned total, zero when not
    /// over budget.
    pub over_amount: Decimal,
    /// Proposed per-category cuts, at most one suggestion per category.
    pub suggestions: Vec<OptimizationSuggestion>,
    /// Planned amount per category after applying the suggestions.
    pub optimized_distribution: BTreeMap<ExpenseCategory, Decimal>,
}
