//! Planned-vs-actual aggregation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{BudgetSummary, CategoryAmounts, ExpenseCategory};
use crate::store::{BudgetItem, Expense};

/// Reduces stored budget items and expenses into a [`BudgetSummary`].
pub struct BudgetAggregator;

impl BudgetAggregator {
    /// Builds the planned-vs-actual summary for one plan's records.
    ///
    /// Every category bucket is present in the result even when no record
    /// touches it. Records whose category label does not parse still count
    /// toward the totals but land in no bucket; that tolerance mirrors how
    /// the totals are displayed next to the breakdown.
    #[must_use]
    pub fn summarize(items: &[BudgetItem], expenses: &[Expense]) -> BudgetSummary {
        let total_planned: Decimal = items.iter().map(|item| item.planned_amount).sum();
        let total_actual: Decimal = expenses.iter().map(|expense| expense.amount).sum();

        let mut by_category: BTreeMap<ExpenseCategory, CategoryAmounts> = ExpenseCategory::ALL
            .iter()
            .map(|category| (*category, CategoryAmounts::default()))
            .collect();

        for item in items {
            if let Ok(category) = item.category.parse::<ExpenseCategory>() {
                if let Some(bucket) = by_category.get_mut(&category) {
                    bucket.planned += item.planned_amount;
                }
            }
        }

        for expense in expenses {
            if let Ok(category) = expense.category.parse::<ExpenseCategory>() {
                if let Some(bucket) = by_category.get_mut(&category) {
                    bucket.actual += expense.amount;
                }
            }
        }

        BudgetSummary {
            total_planned,
            total_actual,
            remaining: total_planned - total_actual,
            by_category,
        }
    }
}
