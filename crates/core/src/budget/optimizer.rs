//! Reduction planning against a target budget.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{BudgetSummary, ExpenseCategory, OptimizationResult, OptimizationSuggestion};

/// Proposes per-category cuts that close the gap between the planned total
/// and a target budget.
///
/// The plan is built in three ordered passes over a running reduction
/// counter: overspent categories first, then categories with unused slack,
/// then a proportional spread across everything still carrying a plan. The
/// passes are heuristic, not an optimal allocation.
pub struct BudgetOptimizer;

impl BudgetOptimizer {
    /// Builds a reduction plan for `summary` against `target_budget`.
    ///
    /// Without an explicit target the current planned total is the target,
    /// so being over budget alone produces no suggestions; the result still
    /// reports the overspend through `is_over_budget` and `over_amount`.
    #[must_use]
    pub fn optimize(summary: &BudgetSummary, target_budget: Option<Decimal>) -> OptimizationResult {
        let is_over_budget = summary.remaining < Decimal::ZERO;
        let over_amount = if is_over_budget {
            summary.total_actual - summary.total_planned
        } else {
            Decimal::ZERO
        };

        let target = target_budget.unwrap_or(summary.total_planned);
        let reduction_needed = summary.total_planned - target;

        let mut suggestions = Vec::new();
        if reduction_needed > Decimal::ZERO {
            let mut remaining = reduction_needed;
            Self::reduce_overages(summary, &mut suggestions, &mut remaining);
            if remaining > Decimal::ZERO {
                Self::reduce_slack(summary, &mut suggestions, &mut remaining);
            }
            if remaining > Decimal::ZERO {
                Self::reduce_proportionally(summary, &mut suggestions, remaining);
            }
        }

        let optimized_distribution = Self::distribution(summary, &suggestions);

        OptimizationResult {
            is_over_budget,
            over_amount,
            suggestions,
            optimized_distribution,
        }
    }

    /// Pass 1: cut categories whose actual spend exceeds their plan,
    /// deepest overage first.
    fn reduce_overages(
        summary: &BudgetSummary,
        suggestions: &mut Vec<OptimizationSuggestion>,
        remaining: &mut Decimal,
    ) {
        let mut overspent: Vec<(ExpenseCategory, Decimal, Decimal)> = summary
            .by_category
            .iter()
            .filter(|(_, amounts)| amounts.actual > amounts.planned)
            .map(|(category, amounts)| {
                (*category, amounts.planned, amounts.actual - amounts.planned)
            })
            .collect();
        overspent.sort_by(|a, b| b.2.cmp(&a.2));

        for (category, planned, overage) in overspent {
            if *remaining <= Decimal::ZERO {
                break;
            }
            let reduction = overage.min(*remaining);
            if planned - reduction < Decimal::ZERO {
                // The cut would push the plan negative; skip the category
                // rather than clamp it.
                continue;
            }
            suggestions.push(OptimizationSuggestion {
                category,
                current_planned: planned,
                suggested_planned: planned - reduction,
                reduction,
                reason: format!(
                    "Spending exceeds the plan by {overage}; cut the planned amount by {reduction}"
                ),
            });
            *remaining -= reduction;
        }
    }

    /// Pass 2: trim categories with unused slack, highest savings rate
    /// first. Each trim is capped at 30% of the slack and 20% of the plan.
    fn reduce_slack(
        summary: &BudgetSummary,
        suggestions: &mut Vec<OptimizationSuggestion>,
        remaining: &mut Decimal,
    ) {
        let savings_cap = Decimal::new(30, 2);
        let planned_cap = Decimal::new(20, 2);

        let mut slack: Vec<(ExpenseCategory, Decimal, Decimal, Decimal)> = summary
            .by_category
            .iter()
            .filter(|(_, amounts)| {
                amounts.planned > amounts.actual && amounts.planned > Decimal::ZERO
            })
            .map(|(category, amounts)| {
                let savings = amounts.planned - amounts.actual;
                (
                    *category,
                    amounts.planned,
                    savings,
                    savings / amounts.planned,
                )
            })
            .collect();
        slack.sort_by(|a, b| b.3.cmp(&a.3));

        for (category, planned, savings, _rate) in slack {
            if *remaining <= Decimal::ZERO {
                break;
            }
            let reduction = (savings * savings_cap)
                .min(planned * planned_cap)
                .min(*remaining);
            if reduction <= Decimal::ZERO {
                continue;
            }
            let reason =
                format!("Unused budget of {savings}; trim {reduction} of the slack");
            *remaining -= Self::merge_suggestion(suggestions, category, planned, reduction, reason);
        }
    }

    /// Pass 3: spread whatever is left across all categories with a
    /// nonzero plan, proportionally to their share of the planned total.
    fn reduce_proportionally(
        summary: &BudgetSummary,
        suggestions: &mut Vec<OptimizationSuggestion>,
        remaining: Decimal,
    ) {
        let carrying: Vec<(ExpenseCategory, Decimal)> = summary
            .by_category
            .iter()
            .filter(|(_, amounts)| amounts.planned > Decimal::ZERO)
            .map(|(category, amounts)| (*category, amounts.planned))
            .collect();
        let total_planned: Decimal = carrying.iter().map(|(_, planned)| *planned).sum();
        if total_planned <= Decimal::ZERO {
            return;
        }

        let count = carrying.len();
        let mut consumed = Decimal::ZERO;
        for (index, (category, planned)) in carrying.into_iter().enumerate() {
            // The last share absorbs division residue so the cuts sum
            // exactly to the remaining target.
            let share = if index + 1 == count {
                remaining - consumed
            } else {
                remaining * planned / total_planned
            };
            if share <= Decimal::ZERO {
                continue;
            }
            let reason = format!("Proportional share ({share}) of the reduction target");
            consumed += Self::merge_suggestion(suggestions, category, planned, share, reason);
        }
    }

    /// Adds `requested` to the category's suggestion, creating one when
    /// needed. The applied amount is capped so `suggested_planned` never
    /// goes negative; returns what was actually applied.
    fn merge_suggestion(
        suggestions: &mut Vec<OptimizationSuggestion>,
        category: ExpenseCategory,
        current_planned: Decimal,
        requested: Decimal,
        reason: String,
    ) -> Decimal {
        if let Some(existing) = suggestions.iter_mut().find(|s| s.category == category) {
            let applied = requested.min(existing.suggested_planned);
            if applied <= Decimal::ZERO {
                return Decimal::ZERO;
            }
            existing.reduction += applied;
            existing.suggested_planned -= applied;
            existing.reason.push_str("; ");
            existing.reason.push_str(&reason);
            applied
        } else {
            let applied = requested.min(current_planned);
            if applied <= Decimal::ZERO {
                return Decimal::ZERO;
            }
            suggestions.push(OptimizationSuggestion {
                category,
                current_planned,
                suggested_planned: current_planned - applied,
                reduction: applied,
                reason,
            });
            applied
        }
    }

    /// Planned amount per category after applying the suggestions.
    fn distribution(
        summary: &BudgetSummary,
        suggestions: &[OptimizationSuggestion],
    ) -> BTreeMap<ExpenseCategory, Decimal> {
        summary
            .by_category
            .iter()
            .map(|(category, amounts)| {
                let planned = suggestions
                    .iter()
                    .find(|s| s.category == *category)
                    .map_or(amounts.planned, |s| s.suggested_planned);
                (*category, planned)
            })
            .collect()
    }
}
