//! Overspend threshold check.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of an overspend check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverspendCheck {
    /// Whether spending exceeds the budget by more than the threshold.
    pub exceeded: bool,
    /// Overspend as a percentage of the budget (negative when under).
    pub percentage: Decimal,
    /// Warning text, present only when the threshold is exceeded.
    pub message: Option<String>,
}

/// The default warning threshold: 10% over budget.
#[must_use]
pub fn default_overspend_threshold() -> Decimal {
    Decimal::new(10, 2)
}

/// Checks whether actual spend exceeds the budget by more than `threshold`
/// (a ratio, e.g. `0.10` for 10%).
///
/// A missing or zero budget cannot be exceeded: the ratio is undefined, so
/// the check reports `exceeded = false` with a zero percentage.
#[must_use]
pub fn check_overspend(
    total_budget: Option<Decimal>,
    total_actual: Decimal,
    threshold: Decimal,
) -> OverspendCheck {
    let Some(budget) = total_budget.filter(|budget| !budget.is_zero()) else {
        return OverspendCheck {
            exceeded: false,
            percentage: Decimal::ZERO,
            message: None,
        };
    };

    let percentage = (total_actual - budget) / budget * Decimal::ONE_HUNDRED;
    let exceeded = percentage > threshold * Decimal::ONE_HUNDRED;
    let message = exceeded.then(|| {
        format!(
            "Budget exceeded by {}%. Consider reviewing alternative courses.",
            percentage.round_dp(1)
        )
    });

    OverspendCheck {
        exceeded,
        percentage,
        message,
    }
}
