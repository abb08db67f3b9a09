//! Settlement data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripmate_shared::types::UserId;

/// Net settlement position for one participant.
///
/// Derived per call from a snapshot of expenses; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementSummary {
    /// The participant.
    pub user_id: UserId,
    /// Total amount this participant paid out of pocket.
    pub total_paid: Decimal,
    /// Total share of the spending attributed to this participant.
    pub total_owed: Decimal,
    /// `total_paid - total_owed`; positive means the participant is owed
    /// money, negative means they owe.
    pub net_amount: Decimal,
}

impl SettlementSummary {
    /// A zeroed position for a participant.
    #[must_use]
    pub fn zeroed(user_id: UserId) -> Self {
        Self {
            user_id,
            total_paid: Decimal::ZERO,
            total_owed: Decimal::ZERO,
            net_amount: Decimal::ZERO,
        }
    }
}
