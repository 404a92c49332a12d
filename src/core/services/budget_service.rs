//! Monthly budget records. Budgets are plain limits; they never read expenses
//! (see `SummaryService::budget_usage` for spending against them).

use uuid::Uuid;

use crate::core::collections::Collections;
use crate::domain::{Budget, BudgetChanges, BudgetDraft, Owned, UserId};
use crate::errors::TrackerError;

use super::{authorize, ServiceResult};

pub struct BudgetService;

impl BudgetService {
    pub fn add(
        collections: &mut Collections,
        user: &UserId,
        draft: BudgetDraft,
    ) -> ServiceResult<Budget> {
        draft.validate()?;
        let budget = Budget::new(user.clone(), draft);
        collections.budgets.push(budget.clone());
        Ok(budget)
    }

    pub fn list_for_user<'a>(collections: &'a Collections, user: &UserId) -> Vec<&'a Budget> {
        collections
            .budgets
            .iter()
            .filter(|budget| budget.is_owned_by(user))
            .collect()
    }

    pub fn update(
        collections: &mut Collections,
        user: &UserId,
        id: Uuid,
        changes: BudgetChanges,
    ) -> ServiceResult<()> {
        authorize(collections.budget(id), user, "update this budget", id)?;
        changes.validate()?;
        if let Some(budget) = collections.budget_mut(id) {
            if let Some(amount) = changes.amount {
                budget.amount = amount;
            }
            if let Some(month) = changes.month {
                budget.month = month;
            }
            if let Some(year) = changes.year {
                budget.year = year;
            }
        }
        Ok(())
    }

    pub fn remove(collections: &mut Collections, user: &UserId, id: Uuid) -> ServiceResult<Budget> {
        authorize(collections.budget(id), user, "delete this budget", id)?;
        let index = collections
            .budgets
            .iter()
            .position(|budget| budget.id == id)
            .ok_or_else(|| TrackerError::NotFound(format!("budget {id}")))?;
        Ok(collections.budgets.remove(index))
    }
}
