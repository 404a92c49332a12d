//! Spending summaries computed from already-fetched expense records.

pub mod budget_usage;
pub mod period;

pub use budget_usage::{budget_usage, spent_in_month, BudgetUsage};
pub use period::{period_totals, week_number, PeriodTotals};
