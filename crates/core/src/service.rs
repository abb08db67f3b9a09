//! Operation facade over a persistence port.
//!
//! Each operation reads a fresh snapshot of records through the
//! [`PlanStore`] port and hands it to the pure components. The facade holds
//! no state of its own, so concurrent callers racing a read-compute-write
//! sequence must be serialized by the storage layer (optimistic versioning
//! or a per-plan transaction), not here.

use rust_decimal::Decimal;
use tracing::debug;

use tripmate_shared::AppResult;
use tripmate_shared::types::{TravelPlanId, UserId};

use crate::budget::{
    BudgetAggregator, BudgetEstimator, BudgetOptimizer, BudgetSummary, ExpenseCategory,
    OptimizationResult, OverspendCheck, check_overspend, default_overspend_threshold,
};
use crate::settlement::{SettlementService, SettlementSummary};
use crate::store::PlanStore;

/// Budget planning operations for one persistence port.
pub struct PlanningService<S> {
    store: S,
}

impl<S: PlanStore> PlanningService<S> {
    /// Creates a service over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Estimates a place's typical cost from its 1-4 price level.
    ///
    /// Pure lookup, never fails and touches no storage.
    #[must_use]
    pub fn estimate_from_place(price_level: i32, category: ExpenseCategory) -> Decimal {
        BudgetEstimator::estimate(price_level, category)
    }

    /// Builds the planned-vs-actual summary for a plan.
    pub async fn budget_summary(&self, plan_id: TravelPlanId) -> AppResult<BudgetSummary> {
        let items = self.store.budget_items(plan_id).await?;
        let expenses = self.store.expenses(plan_id).await?;
        debug!(
            %plan_id,
            items = items.len(),
            expenses = expenses.len(),
            "aggregating budget summary"
        );
        Ok(BudgetAggregator::summarize(&items, &expenses))
    }

    /// Proposes per-category cuts that bring the plan down to
    /// `target_budget` (the current planned total when omitted).
    ///
    /// Applying the suggestions back to storage is the caller's concern and
    /// belongs in a single transaction with a concurrency check.
    pub async fn optimize_budget(
        &self,
        plan_id: TravelPlanId,
        target_budget: Option<Decimal>,
    ) -> AppResult<OptimizationResult> {
        let summary = self.budget_summary(plan_id).await?;
        let result = BudgetOptimizer::optimize(&summary, target_budget);
        debug!(
            %plan_id,
            suggestions = result.suggestions.len(),
            over_budget = result.is_over_budget,
            "built reduction plan"
        );
        Ok(result)
    }

    /// Settles the plan's shared expenses across the participant roster.
    pub async fn calculate_settlement(
        &self,
        plan_id: TravelPlanId,
        participants: &[UserId],
    ) -> AppResult<Vec<SettlementSummary>> {
        let expenses = self.store.expenses(plan_id).await?;
        debug!(
            %plan_id,
            expenses = expenses.len(),
            participants = participants.len(),
            "calculating settlement"
        );
        Ok(SettlementService::settle(&expenses, participants))
    }

    /// Checks whether actual spend exceeds the plan's overall budget by
    /// more than `threshold` (10% when omitted).
    pub async fn check_budget_exceeded(
        &self,
        plan_id: TravelPlanId,
        threshold: Option<Decimal>,
    ) -> AppResult<OverspendCheck> {
        let plan = self.store.travel_plan(plan_id).await?;
        let expenses = self.store.expenses(plan_id).await?;
        let total_actual: Decimal = expenses.iter().map(|expense| expense.amount).sum();
        Ok(check_overspend(
            plan.total_budget,
            total_actual,
            threshold.unwrap_or_else(default_overspend_threshold),
        ))
    }
}
