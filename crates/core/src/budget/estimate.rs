//! Price-level based cost estimation.

use rust_decimal::Decimal;

use super::types::ExpenseCategory;

/// The price level used for unknown category labels: "medium".
const FALLBACK_PRICE_LEVEL: i32 = 2;

/// Estimates typical costs for a place from its price level.
pub struct BudgetEstimator;

impl BudgetEstimator {
    /// Estimates the cost of a category at a 1-4 price level.
    ///
    /// Out-of-range levels are clamped into `[1, 4]` rather than rejected.
    /// Total function: every category has all four tiers.
    #[must_use]
    pub fn estimate(price_level: i32, category: ExpenseCategory) -> Decimal {
        let level = price_level.clamp(1, 4);
        #[allow(clippy::cast_sign_loss)]
        let tier = (level - 1) as usize;
        Decimal::from(Self::tier_prices(category)[tier])
    }

    /// Estimates from a raw category label.
    ///
    /// Labels that do not parse fall back to the medium-tier price of
    /// [`ExpenseCategory::Other`], regardless of the requested level.
    #[must_use]
    pub fn estimate_for_label(price_level: i32, label: &str) -> Decimal {
        match label.parse::<ExpenseCategory>() {
            Ok(category) => Self::estimate(price_level, category),
            Err(_) => Self::estimate(FALLBACK_PRICE_LEVEL, ExpenseCategory::Other),
        }
    }

    /// Base prices per tier, in whole currency units.
    ///
    /// Tier order: 1=budget, 2=medium, 3=expensive, 4=premium.
    const fn tier_prices(category: ExpenseCategory) -> [i64; 4] {
        match category {
            ExpenseCategory::Transport => [5_000, 15_000, 30_000, 50_000],
            ExpenseCategory::Lodging => [50_000, 100_000, 200_000, 300_000],
            ExpenseCategory::Food => [15_000, 30_000, 60_000, 100_000],
            ExpenseCategory::Activity => [10_000, 30_000, 50_000, 100_000],
            ExpenseCategory::Shopping => [20_000, 50_000, 100_000, 200_000],
            ExpenseCategory::Other => [10_000, 20_000, 40_000, 60_000],
        }
    }
}
