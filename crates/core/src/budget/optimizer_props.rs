//! Property-based tests for the reduction planner.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::optimizer::BudgetOptimizer;
use super::types::{BudgetSummary, CategoryAmounts, ExpenseCategory};

/// Builds a summary straight from per-category numbers.
fn summary_from(amounts: &[(ExpenseCategory, i64, i64)]) -> BudgetSummary {
    let mut by_category: BTreeMap<ExpenseCategory, CategoryAmounts> = ExpenseCategory::ALL
        .iter()
        .map(|category| (*category, CategoryAmounts::default()))
        .collect();
    for (category, planned, actual) in amounts {
        let bucket = by_category.get_mut(category).unwrap();
        bucket.planned += Decimal::from(*planned);
        bucket.actual += Decimal::from(*actual);
    }

    let total_planned: Decimal = by_category.values().map(|b| b.planned).sum();
    let total_actual: Decimal = by_category.values().map(|b| b.actual).sum();
    BudgetSummary {
        total_planned,
        total_actual,
        remaining: total_planned - total_actual,
        by_category,
    }
}

/// Strategy for one planned/actual pair per category.
fn amounts_strategy() -> impl Strategy<Value = Vec<(ExpenseCategory, i64, i64)>> {
    prop::collection::vec((0i64..1_000_000, 0i64..1_000_000), 6).prop_map(|pairs| {
        ExpenseCategory::ALL
            .iter()
            .zip(pairs)
            .map(|(category, (planned, actual))| (*category, planned, actual))
            .collect()
    })
}

proptest! {
    /// With pure slack and a target gap of at most half the planned total,
    /// the suggested cuts close the gap exactly.
    #[test]
    fn test_reductions_sum_to_the_gap_exactly(
        planned in prop::collection::vec(1i64..1_000_000, 1..=6),
        gap_percent in 1i64..=50,
    ) {
        let amounts: Vec<(ExpenseCategory, i64, i64)> = ExpenseCategory::ALL
            .iter()
            .zip(planned)
            .map(|(category, planned)| (*category, planned, 0))
            .collect();
        let summary = summary_from(&amounts);
        let reduction_needed = summary.total_planned * Decimal::new(gap_percent, 2);
        let target = summary.total_planned - reduction_needed;

        let result = BudgetOptimizer::optimize(&summary, Some(target));

        let total_cut: Decimal = result.suggestions.iter().map(|s| s.reduction).sum();
        prop_assert_eq!(total_cut, reduction_needed);
    }

    /// Suggestions never propose a negative plan, always satisfy
    /// `suggested = current - reduction`, never over-reduce past the gap,
    /// and name each category at most once.
    #[test]
    fn test_suggestion_invariants_hold_under_any_inputs(
        amounts in amounts_strategy(),
        target in 0i64..2_000_000,
    ) {
        let summary = summary_from(&amounts);
        let result = BudgetOptimizer::optimize(&summary, Some(Decimal::from(target)));

        let reduction_needed =
            (summary.total_planned - Decimal::from(target)).max(Decimal::ZERO);
        let total_cut: Decimal = result.suggestions.iter().map(|s| s.reduction).sum();
        prop_assert!(total_cut <= reduction_needed);

        let mut seen = Vec::new();
        for suggestion in &result.suggestions {
            prop_assert!(suggestion.suggested_planned >= Decimal::ZERO);
            prop_assert!(suggestion.reduction > Decimal::ZERO);
            prop_assert_eq!(
                suggestion.suggested_planned,
                suggestion.current_planned - suggestion.reduction
            );
            prop_assert!(!seen.contains(&suggestion.category));
            seen.push(suggestion.category);
        }
    }

    /// The optimized distribution is the planned map with every suggestion
    /// applied and nothing else touched.
    #[test]
    fn test_distribution_reflects_suggestions(
        amounts in amounts_strategy(),
        target in 0i64..2_000_000,
    ) {
        let summary = summary_from(&amounts);
        let result = BudgetOptimizer::optimize(&summary, Some(Decimal::from(target)));

        for category in ExpenseCategory::ALL {
            let cut = result
                .suggestions
                .iter()
                .find(|s| s.category == category)
                .map_or(Decimal::ZERO, |s| s.reduction);
            prop_assert_eq!(
                result.optimized_distribution[&category],
                summary.by_category[&category].planned - cut
            );
        }
    }

    /// The over-budget report always mirrors the summary, with or without
    /// suggestions.
    #[test]
    fn test_over_budget_report_mirrors_summary(
        amounts in amounts_strategy(),
    ) {
        let summary = summary_from(&amounts);
        let result = BudgetOptimizer::optimize(&summary, None);

        prop_assert_eq!(result.is_over_budget, summary.remaining < Decimal::ZERO);
        if result.is_over_budget {
            prop_assert_eq!(result.over_amount, summary.total_actual - summary.total_planned);
        } else {
            prop_assert_eq!(result.over_amount, Decimal::ZERO);
        }
        prop_assert!(result.suggestions.is_empty());
    }
}
