//! Facade that ties the signed-in session, the clock, and the backends together.
//!
//! Every mutation is applied to a copy of the collections, persisted, and only
//! then swapped in, so a failed save leaves the in-memory state untouched.

use uuid::Uuid;

use crate::core::clock::Clock;
use crate::core::collections::Collections;
use crate::core::services::{
    BudgetService, CategoryService, ExpenseService, ExpenseSortKey, SortOrder, SummaryService,
};
use crate::core::session::Session;
use crate::domain::{
    Budget, BudgetChanges, BudgetDraft, Category, CategoryChanges, ExpenseChanges, ExpenseDraft,
    ExpenseRecord, ReceiptUpload, UserId, UserProfile,
};
use crate::errors::Result;
use crate::storage::{ReceiptStore, StorageBackend};
use crate::summary::{BudgetUsage, PeriodTotals};

pub struct Tracker {
    session: Session,
    clock: Box<dyn Clock>,
    storage: Box<dyn StorageBackend>,
    receipts: Box<dyn ReceiptStore>,
    collections: Collections,
}

impl Tracker {
    /// Loads the stored collections and starts with nobody signed in.
    pub fn open(
        storage: Box<dyn StorageBackend>,
        receipts: Box<dyn ReceiptStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let collections = storage.load()?;
        tracing::info!(
            expenses = collections.expenses.len(),
            categories = collections.categories.len(),
            budgets = collections.budgets.len(),
            "opened tracker"
        );
        Ok(Self {
            session: Session::new(),
            clock,
            storage,
            receipts,
            collections,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn login(&mut self, profile: UserProfile) {
        self.session.login(profile);
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    fn user(&self) -> Result<UserId> {
        self.session.require_user().cloned()
    }

    fn commit(&mut self, next: Collections) -> Result<()> {
        self.storage.save(&next)?;
        self.collections = next;
        Ok(())
    }

    fn upload(&self, receipt: Option<&ReceiptUpload>) -> Result<Option<String>> {
        receipt
            .map(|upload| self.receipts.put(&upload.file_name, &upload.bytes))
            .transpose()
    }

    fn discard_receipt(&self, key: &str) {
        if let Err(err) = self.receipts.remove(key) {
            tracing::warn!(%key, error = %err, "couldn't delete receipt file from storage");
        }
    }

    // Expenses

    pub fn expenses(&self) -> Result<Vec<&ExpenseRecord>> {
        let user = self.session.require_user()?;
        Ok(ExpenseService::list_for_user(&self.collections, user))
    }

    pub fn expenses_sorted(
        &self,
        key: ExpenseSortKey,
        order: SortOrder,
    ) -> Result<Vec<&ExpenseRecord>> {
        let user = self.session.require_user()?;
        Ok(ExpenseService::list_sorted(&self.collections, user, key, order))
    }

    /// Validates, uploads the receipt (if any), then stores the record.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        let user = self.user()?;
        draft.validate()?;
        let receipt = self.upload(draft.receipt.as_ref())?;

        let mut next = self.collections.clone();
        let stored = ExpenseService::create(&mut next, &user, &draft, receipt.clone())
            .and_then(|record| self.commit(next).map(|_| record));
        match stored {
            Ok(record) => {
                tracing::info!(id = %record.id, %user, amount = record.amount, "expense added");
                Ok(record)
            }
            Err(err) => {
                if let Some(key) = receipt {
                    self.discard_receipt(&key);
                }
                Err(err)
            }
        }
    }

    pub fn update_expense(&mut self, id: Uuid, changes: ExpenseChanges) -> Result<()> {
        let user = self.user()?;
        ExpenseService::owned(&self.collections, &user, id, "update this expense")?;
        changes.validate()?;
        let receipt = self.upload(changes.receipt.as_ref())?;

        let mut next = self.collections.clone();
        let updated = ExpenseService::update(&mut next, &user, id, &changes, receipt.clone())
            .and_then(|replaced| self.commit(next).map(|_| replaced));
        match updated {
            Ok(replaced) => {
                if let Some(old) = replaced {
                    self.discard_receipt(&old);
                }
                tracing::info!(%id, %user, "expense updated");
                Ok(())
            }
            Err(err) => {
                if let Some(key) = receipt {
                    self.discard_receipt(&key);
                }
                Err(err)
            }
        }
    }

    /// Removes the receipt of an owned record, then deletes the record. A
    /// receipt that cannot be removed is logged and does not block the delete.
    pub fn delete_expense(&mut self, id: Uuid) -> Result<()> {
        let user = self.user()?;
        let mut next = self.collections.clone();
        let removed = ExpenseService::remove(&mut next, &user, id)?;
        if let Some(key) = removed.receipt.as_deref() {
            self.discard_receipt(key);
        }
        self.commit(next)?;
        tracing::info!(%id, %user, "expense deleted");
        Ok(())
    }

    // Categories

    pub fn categories(&self) -> Result<Vec<&Category>> {
        let user = self.session.require_user()?;
        Ok(CategoryService::list_for_user(&self.collections, user))
    }

    pub fn add_category(&mut self, name: &str) -> Result<Category> {
        let user = self.user()?;
        let mut next = self.collections.clone();
        let category = CategoryService::add(&mut next, &user, name)?;
        self.commit(next)?;
        tracing::info!(id = %category.id, %user, "category added");
        Ok(category)
    }

    pub fn update_category(&mut self, id: Uuid, changes: CategoryChanges) -> Result<()> {
        let user = self.user()?;
        let mut next = self.collections.clone();
        CategoryService::update(&mut next, &user, id, changes)?;
        self.commit(next)
    }

    pub fn delete_category(&mut self, id: Uuid) -> Result<()> {
        let user = self.user()?;
        let mut next = self.collections.clone();
        CategoryService::remove(&mut next, &user, id)?;
        self.commit(next)?;
        tracing::info!(%id, %user, "category deleted");
        Ok(())
    }

    pub fn category_name(&self, id: Uuid) -> &str {
        CategoryService::category_name(&self.collections, id)
    }

    // Budgets

    pub fn budgets(&self) -> Result<Vec<&Budget>> {
        let user = self.session.require_user()?;
        Ok(BudgetService::list_for_user(&self.collections, user))
    }

    pub fn add_budget(&mut self, draft: BudgetDraft) -> Result<Budget> {
        let user = self.user()?;
        let mut next = self.collections.clone();
        let budget = BudgetService::add(&mut next, &user, draft)?;
        self.commit(next)?;
        tracing::info!(id = %budget.id, %user, period = %budget.period_label(), "budget added");
        Ok(budget)
    }

    pub fn update_budget(&mut self, id: Uuid, changes: BudgetChanges) -> Result<()> {
        let user = self.user()?;
        let mut next = self.collections.clone();
        BudgetService::update(&mut next, &user, id, changes)?;
        self.commit(next)
    }

    pub fn delete_budget(&mut self, id: Uuid) -> Result<()> {
        let user = self.user()?;
        let mut next = self.collections.clone();
        BudgetService::remove(&mut next, &user, id)?;
        self.commit(next)?;
        tracing::info!(%id, %user, "budget deleted");
        Ok(())
    }

    // Summaries

    /// Dashboard totals for the signed-in user, relative to the clock's today.
    pub fn period_totals(&self) -> Result<PeriodTotals> {
        let user = self.session.require_user()?;
        Ok(SummaryService::totals_for_user(
            &self.collections,
            user,
            self.clock.as_ref(),
        ))
    }

    pub fn budget_usage(&self) -> Result<Vec<BudgetUsage>> {
        let user = self.session.require_user()?;
        Ok(SummaryService::budget_usage(&self.collections, user))
    }
}
