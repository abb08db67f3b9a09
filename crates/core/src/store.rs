//! Persistence port and the record shapes it serves.
//!
//! The engine never talks to a database directly. Callers hand it a
//! [`PlanStore`] implementation; every operation reads a fresh snapshot of
//! records through the port and computes from that snapshot alone. Writes
//! (applying optimizer suggestions, marking splits paid) stay on the caller's
//! side of the port, inside whatever transaction or optimistic-concurrency
//! scheme the storage layer provides.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripmate_shared::AppResult;
use tripmate_shared::types::{BudgetItemId, ExpenseId, TravelPlanId, UserId};

/// The slice of a travel plan the engine needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPlan {
    /// Travel plan ID.
    pub id: TravelPlanId,
    /// Overall trip budget, if the user set one.
    pub total_budget: Option<Decimal>,
}

/// A planned allocation of money to a spending category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Budget item ID.
    pub id: BudgetItemId,
    /// Spending category label as stored.
    pub category: String,
    /// Planned amount, non-negative.
    pub planned_amount: Decimal,
}

/// Actual recorded spend, with any per-user split breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Amount spent.
    pub amount: Decimal,
    /// Spending category label as stored.
    pub category: String,
    /// User who paid, when known.
    pub paid_by_user_id: Option<UserId>,
    /// Date the expense occurred.
    pub expense_date: NaiveDate,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Uploaded receipt location.
    pub receipt_url: Option<String>,
    /// Per-user shares. Empty means "split evenly among the participants".
    pub splits: Vec<ExpenseSplit>,
}

/// A per-user share of one expense's amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSplit {
    /// The expense this share belongs to.
    pub expense_id: ExpenseId,
    /// The user who owes this share.
    pub user_id: UserId,
    /// Share amount.
    pub amount: Decimal,
    /// Whether the share has been settled.
    pub is_paid: bool,
}

/// Read-side persistence port for the budget engine.
///
/// Implementations fetch records for one travel plan; failures surface as
/// [`tripmate_shared::AppError::Database`] and are propagated unchanged by
/// the engine.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Fetches the travel plan header.
    async fn travel_plan(&self, plan_id: TravelPlanId) -> AppResult<TravelPlan>;

    /// Fetches all planned budget items for a travel plan.
    async fn budget_items(&self, plan_id: TravelPlanId) -> AppResult<Vec<BudgetItem>>;

    /// Fetches all expenses for a travel plan, splits included.
    async fn expenses(&self, plan_id: TravelPlanId) -> AppResult<Vec<Expense>>;
}
