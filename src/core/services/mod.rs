pub mod budget_service;
pub mod category_service;
pub mod expense_service;
pub mod summary_service;

#[cfg(test)]
mod tests;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use expense_service::{ExpenseService, ExpenseSortKey, SortOrder};
pub use summary_service::SummaryService;

use uuid::Uuid;

use crate::domain::{Owned, UserId};
use crate::errors::{Result, TrackerError};

pub type ServiceResult<T> = Result<T>;

/// Fails with `Unauthorized` unless `record` exists and belongs to `user`. A
/// missing record is reported the same way, so ids owned by others cannot be probed.
pub(crate) fn authorize<'a, T: Owned>(
    record: Option<&'a T>,
    user: &UserId,
    action: &str,
    id: Uuid,
) -> ServiceResult<&'a T> {
    match record {
        Some(record) if record.is_owned_by(user) => Ok(record),
        _ => {
            tracing::warn!(%user, %id, action, "rejected unauthorized access");
            Err(TrackerError::Unauthorized(action.to_string()))
        }
    }
}
