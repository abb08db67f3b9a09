//! Property-based tests for settlement calculation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use tripmate_shared::types::{ExpenseId, UserId};

use super::service::SettlementService;
use crate::store::Expense;

fn roster(size: usize) -> Vec<UserId> {
    (0..size).map(|_| UserId::new()).collect()
}

fn unsplit_expense(amount: Decimal, paid_by: UserId) -> Expense {
    Expense {
        id: ExpenseId::new(),
        amount,
        category: "other".to_string(),
        paid_by_user_id: Some(paid_by),
        expense_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        notes: None,
        receipt_url: None,
        splits: Vec::new(),
    }
}

proptest! {
    /// Shares always sum back to the divided amount, whole units or not.
    #[test]
    fn test_even_shares_sum_exactly(
        amount in 0i64..100_000_000,
        scale in 0u32..=2,
        count in 1usize..10,
    ) {
        let amount = Decimal::new(amount, scale);
        let shares = SettlementService::even_shares(amount, count);

        prop_assert_eq!(shares.len(), count);
        let total: Decimal = shares.iter().copied().sum();
        prop_assert_eq!(total, amount);
    }

    /// For whole-unit amounts no participant pays more than one unit over
    /// anyone else.
    #[test]
    fn test_even_shares_spread_at_most_one_unit(
        amount in 0i64..100_000_000,
        count in 1usize..10,
    ) {
        let shares = SettlementService::even_shares(Decimal::from(amount), count);

        let min = shares.iter().min().copied().unwrap();
        let max = shares.iter().max().copied().unwrap();
        prop_assert!(max - min <= Decimal::ONE);
    }

    /// A closed ledger (every expense paid by and divided among the
    /// roster) nets to exactly zero.
    #[test]
    fn test_closed_ledger_nets_to_zero(
        roster_size in 1usize..6,
        expenses in prop::collection::vec((0i64..10_000_000, 0usize..6), 0..12),
    ) {
        let participants = roster(roster_size);
        let expenses: Vec<Expense> = expenses
            .into_iter()
            .map(|(amount, payer)| {
                unsplit_expense(Decimal::from(amount), participants[payer % roster_size])
            })
            .collect();

        let summaries = SettlementService::settle(&expenses, &participants);

        let net_total: Decimal = summaries.iter().map(|s| s.net_amount).sum();
        prop_assert_eq!(net_total, Decimal::ZERO);

        let paid_total: Decimal = summaries.iter().map(|s| s.total_paid).sum();
        let owed_total: Decimal = summaries.iter().map(|s| s.total_owed).sum();
        prop_assert_eq!(paid_total, owed_total);
    }

    /// Pre-built 1/N split rows settle identically to the implicit even
    /// division of an unsplit expense.
    #[test]
    fn test_explicit_even_splits_match_implicit_division(
        roster_size in 1usize..6,
        amount in 0i64..10_000_000,
    ) {
        let participants = roster(roster_size);
        let amount = Decimal::from(amount);

        let implicit = unsplit_expense(amount, participants[0]);
        let mut explicit = unsplit_expense(amount, participants[0]);
        explicit.splits =
            SettlementService::even_splits(explicit.id, amount, &participants);

        let from_implicit = SettlementService::settle(&[implicit], &participants);
        let from_explicit = SettlementService::settle(&[explicit], &participants);

        for (a, b) in from_implicit.iter().zip(&from_explicit) {
            prop_assert_eq!(a.user_id, b.user_id);
            prop_assert_eq!(a.total_owed, b.total_owed);
            prop_assert_eq!(a.net_amount, b.net_amount);
        }
    }
}
