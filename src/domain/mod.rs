//! Domain records owned by a signed-in user, plus their validation rules.

pub mod budget;
pub mod category;
pub mod common;
pub mod expense;
pub mod user;

pub use budget::{Budget, BudgetChanges, BudgetDraft};
pub use category::{Category, CategoryChanges, UNKNOWN_CATEGORY};
pub use common::{Owned, UserId};
pub use expense::{
    parse_expense_date, ExpenseChanges, ExpenseDraft, ExpenseRecord, ReceiptUpload,
};
pub use user::UserProfile;
