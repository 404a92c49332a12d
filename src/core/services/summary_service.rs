use crate::core::clock::Clock;
use crate::core::collections::Collections;
use crate::domain::{ExpenseRecord, UserId};
use crate::summary::{self, BudgetUsage, PeriodTotals};

use super::{BudgetService, ExpenseService};

pub struct SummaryService;

impl SummaryService {
    /// Reads `clock` once, then folds `records` against that date.
    pub fn period_totals(clock: &dyn Clock, records: &[ExpenseRecord]) -> PeriodTotals {
        let today = clock.today();
        summary::period_totals(records, today)
    }

    /// Dashboard totals for the records owned by `user`.
    pub fn totals_for_user(
        collections: &Collections,
        user: &UserId,
        clock: &dyn Clock,
    ) -> PeriodTotals {
        let owned: Vec<ExpenseRecord> = ExpenseService::list_for_user(collections, user)
            .into_iter()
            .cloned()
            .collect();
        Self::period_totals(clock, &owned)
    }

    pub fn budget_usage(collections: &Collections, user: &UserId) -> Vec<BudgetUsage> {
        let owned: Vec<ExpenseRecord> = ExpenseService::list_for_user(collections, user)
            .into_iter()
            .cloned()
            .collect();
        let budgets: Vec<_> = BudgetService::list_for_user(collections, user)
            .into_iter()
            .cloned()
            .collect();
        summary::budget_usage(&budgets, &owned)
    }
}
