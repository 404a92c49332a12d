use chrono::Datelike;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Budget, ExpenseRecord};

/// How much of one monthly budget has been spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub budget_id: Uuid,
    pub month: u32,
    pub year: i32,
    pub limit: f64,
    pub spent: f64,
    pub remaining: f64,
    pub over_budget: bool,
}

/// Sum of expense amounts dated within `month`/`year`.
pub fn spent_in_month(records: &[ExpenseRecord], month: u32, year: i32) -> f64 {
    records
        .iter()
        .filter(|record| record.date.year() == year && record.date.month() == month)
        .map(|record| record.amount)
        .sum()
}

/// Usage for every budget, in the order the budgets were given. Budgets sharing
/// a month are reported separately, each against the full month of spending.
pub fn budget_usage(budgets: &[Budget], records: &[ExpenseRecord]) -> Vec<BudgetUsage> {
    budgets
        .iter()
        .map(|budget| {
            let spent = spent_in_month(records, budget.month, budget.year);
            BudgetUsage {
                budget_id: budget.id,
                month: budget.month,
                year: budget.year,
                limit: budget.amount,
                spent,
                remaining: budget.amount - spent,
                over_budget: spent > budget.amount,
            }
        })
        .collect()
}
