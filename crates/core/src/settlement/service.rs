//! Settlement calculation over expenses and splits.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tripmate_shared::types::{ExpenseId, UserId};

use super::types::SettlementSummary;
use crate::store::{Expense, ExpenseSplit};

/// Computes per-participant net balances for shared expenses.
pub struct SettlementService;

impl SettlementService {
    /// Settles a plan's expenses across the participant roster.
    ///
    /// Every roster member gets a summary, in roster order. An expense with
    /// splits charges exactly those shares; one without splits is divided
    /// evenly via [`Self::even_shares`]. Payers and split users outside the
    /// roster are skipped silently, so an open ledger does not necessarily
    /// net to zero.
    #[must_use]
    pub fn settle(expenses: &[Expense], participants: &[UserId]) -> Vec<SettlementSummary> {
        let mut summaries: Vec<SettlementSummary> = participants
            .iter()
            .map(|user_id| SettlementSummary::zeroed(*user_id))
            .collect();
        let index: HashMap<UserId, usize> = participants
            .iter()
            .enumerate()
            .map(|(position, user_id)| (*user_id, position))
            .collect();

        for expense in expenses {
            if let Some(payer) = expense.paid_by_user_id {
                if let Some(&position) = index.get(&payer) {
                    summaries[position].total_paid += expense.amount;
                }
            }

            if expense.splits.is_empty() {
                for (position, share) in Self::even_shares(expense.amount, participants.len())
                    .into_iter()
                    .enumerate()
                {
                    summaries[position].total_owed += share;
                }
            } else {
                for split in &expense.splits {
                    if let Some(&position) = index.get(&split.user_id) {
                        summaries[position].total_owed += split.amount;
                    }
                }
            }
        }

        for summary in &mut summaries {
            summary.net_amount = summary.total_paid - summary.total_owed;
        }

        summaries
    }

    /// Builds unpaid 1/N split rows for a new expense, one per participant.
    #[must_use]
    pub fn even_splits(
        expense_id: ExpenseId,
        amount: Decimal,
        participants: &[UserId],
    ) -> Vec<ExpenseSplit> {
        Self::even_shares(amount, participants.len())
            .into_iter()
            .zip(participants)
            .map(|(share, user_id)| ExpenseSplit {
                expense_id,
                user_id: *user_id,
                amount: share,
                is_paid: false,
            })
            .collect()
    }

    /// Divides `amount` into `count` shares that sum back exactly.
    ///
    /// Largest-remainder at whole-unit granularity: everyone gets the
    /// floored 1/N share, then the leftover units go one per participant
    /// in roster order. Any sub-unit residue lands on the participant
    /// after the last whole unit, keeping the total exact.
    #[must_use]
    pub fn even_shares(amount: Decimal, count: usize) -> Vec<Decimal> {
        if count == 0 {
            return Vec::new();
        }

        let divisor = Decimal::from(count);
        let base = (amount / divisor).floor();
        let mut leftover = amount - base * divisor;

        let mut shares = vec![base; count];
        let mut position = 0;
        while leftover >= Decimal::ONE {
            shares[position] += Decimal::ONE;
            leftover -= Decimal::ONE;
            position += 1;
        }
        if !leftover.is_zero() {
            shares[position] += leftover;
        }
        shares
    }
}
