//! Budget planning and optimization.
//!
//! This module implements the budget side of the engine:
//! - Price-level based cost estimation
//! - Planned-vs-actual aggregation into a category summary
//! - The reduction planner that closes a gap to a target budget
//! - The overspend threshold check
//! - Domain types shared by those components

pub mod estimate;
pub mod optimizer;
pub mod summary;
pub mod threshold;
pub mod types;

#[cfg(test)]
mod optimizer_props;

pub use estimate::BudgetEstimator;
pub use optimizer::BudgetOptimizer;
pub use summary::BudgetAggregator;
pub use threshold::{OverspendCheck, check_overspend, default_overspend_threshold};
pub use types::{
    BudgetSummary, CategoryAmounts, ExpenseCategory, OptimizationResult, OptimizationSuggestion,
};
