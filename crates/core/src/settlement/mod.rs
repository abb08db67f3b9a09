//! Per-person settlement of shared expenses.
//!
//! Reduces a plan's expenses and their split breakdowns into one net
//! balance per participant: who paid, who owes, and who should be
//! reimbursed.

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::SettlementService;
pub use types::SettlementSummary;
