use std::cmp::Ordering;

use uuid::Uuid;

use crate::core::collections::Collections;
use crate::domain::{ExpenseChanges, ExpenseDraft, ExpenseRecord, Owned, UserId};
use crate::errors::TrackerError;

use super::{authorize, CategoryService, ServiceResult};

/// Column an expense listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseSortKey {
    Description,
    Category,
    Amount,
    #[default]
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

pub struct ExpenseService;

impl ExpenseService {
    pub fn list_for_user<'a>(collections: &'a Collections, user: &UserId) -> Vec<&'a ExpenseRecord> {
        collections
            .expenses
            .iter()
            .filter(|expense| expense.is_owned_by(user))
            .collect()
    }

    /// Owned records sorted by `key`. Category ordering uses resolved category names.
    pub fn list_sorted<'a>(
        collections: &'a Collections,
        user: &UserId,
        key: ExpenseSortKey,
        order: SortOrder,
    ) -> Vec<&'a ExpenseRecord> {
        let mut expenses = Self::list_for_user(collections, user);
        expenses.sort_by(|a, b| {
            let ordering = match key {
                ExpenseSortKey::Description => a.description.cmp(&b.description),
                ExpenseSortKey::Category => {
                    CategoryService::category_name(collections, a.category_id)
                        .cmp(CategoryService::category_name(collections, b.category_id))
                }
                ExpenseSortKey::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
                ExpenseSortKey::Date => a.date.cmp(&b.date),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        expenses
    }

    /// Validates `draft` and stores a new record owned by `user`.
    pub fn create(
        collections: &mut Collections,
        user: &UserId,
        draft: &ExpenseDraft,
        receipt: Option<String>,
    ) -> ServiceResult<ExpenseRecord> {
        let date = draft.validate()?;
        let mut record = ExpenseRecord::new(
            user.clone(),
            draft.amount,
            date,
            draft.description.trim(),
            draft.category_id,
        );
        record.receipt = receipt;
        collections.expenses.push(record.clone());
        Ok(record)
    }

    pub fn owned<'a>(
        collections: &'a Collections,
        user: &UserId,
        id: Uuid,
        action: &str,
    ) -> ServiceResult<&'a ExpenseRecord> {
        authorize(collections.expense(id), user, action, id)
    }

    /// Applies `changes`; a `receipt` key replaces the stored one. Returns the
    /// replaced key so the caller can drop the old blob.
    pub fn update(
        collections: &mut Collections,
        user: &UserId,
        id: Uuid,
        changes: &ExpenseChanges,
        receipt: Option<String>,
    ) -> ServiceResult<Option<String>> {
        Self::owned(collections, user, id, "update this expense")?;
        let date = changes.validate()?;
        let Some(expense) = collections.expense_mut(id) else {
            return Ok(None);
        };
        if let Some(amount) = changes.amount {
            expense.amount = amount;
        }
        if let Some(description) = &changes.description {
            expense.description = description.trim().to_string();
        }
        if let Some(category_id) = changes.category_id {
            expense.category_id = category_id;
        }
        if let Some(date) = date {
            expense.date = date;
        }
        let replaced = match receipt {
            Some(key) => expense.receipt.replace(key),
            None => None,
        };
        Ok(replaced)
    }

    /// Removes the record and returns it, so its receipt can be cleaned up.
    pub fn remove(
        collections: &mut Collections,
        user: &UserId,
        id: Uuid,
    ) -> ServiceResult<ExpenseRecord> {
        Self::owned(collections, user, id, "delete this expense")?;
        let index = collections
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or_else(|| TrackerError::NotFound(format!("expense {id}")))?;
        Ok(collections.expenses.remove(index))
    }
}
