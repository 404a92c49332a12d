mod common;

use std::fs;

use common::{date, open_tracker, temp_base};
use expense_core::{
    core::{utils::PathResolver, FixedClock, Tracker},
    domain::{BudgetDraft, ExpenseDraft, UserProfile},
    storage::{json_backend::save_collections_to_path, DirReceiptStore, JsonStorage},
    storage::StorageBackend,
    TrackerError,
};
use uuid::Uuid;

#[test]
fn records_survive_reopening() {
    let base = temp_base();
    // Day 170 of 2025; June 18th-24th share week 25.
    let today = date(2025, 6, 19);
    let (category, expense) = {
        let mut tracker = open_tracker(&base, today);
        tracker.login(UserProfile::new("alice"));
        let category = tracker.add_category("Transport").unwrap();
        let expense = tracker
            .add_expense(ExpenseDraft::new(42.5, "Train ticket", category.id, "2025-06-18"))
            .unwrap();
        tracker.add_budget(BudgetDraft::new(300.0, 6, 2025)).unwrap();
        (category, expense)
    };

    let mut reopened = open_tracker(&base, today);
    reopened.login(UserProfile::new("alice"));
    let expenses = reopened.expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].id, expense.id);
    assert_eq!(expenses[0].date, date(2025, 6, 18));
    assert_eq!(reopened.category_name(category.id), "Transport");
    assert_eq!(reopened.budgets().unwrap().len(), 1);

    let totals = reopened.period_totals().unwrap();
    assert_eq!(totals.today, 0.0);
    assert_eq!(totals.this_week, 42.5);
    assert_eq!(totals.this_year, 42.5);
}

#[test]
fn collections_file_is_pretty_json_without_temp_leftovers() {
    let base = temp_base();
    let mut tracker = open_tracker(&base, date(2025, 6, 18));
    tracker.login(UserProfile::new("bob"));
    tracker.add_category("Rent").unwrap();

    let path = PathResolver::collections_file_in(&base);
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"schema_version\""));
    assert!(raw.contains("\"Rent\""));
    assert!(raw.contains('\n'));

    let leftovers: Vec<_> = fs::read_dir(&base)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn corrupt_collections_file_is_a_storage_error() {
    let base = temp_base();
    fs::write(PathResolver::collections_file_in(&base), "{ not json").unwrap();
    let storage = JsonStorage::new(Some(base.clone())).unwrap();
    assert!(matches!(storage.load(), Err(TrackerError::Storage(_))));
}

#[test]
fn deletions_are_persisted() {
    let base = temp_base();
    let today = date(2025, 6, 18);
    {
        let mut tracker = open_tracker(&base, today);
        tracker.login(UserProfile::new("alice"));
        let category = tracker.add_category("Snacks").unwrap();
        let expense = tracker
            .add_expense(ExpenseDraft::new(5.0, "Chips", category.id, "2025-06-18"))
            .unwrap();
        tracker.delete_expense(expense.id).unwrap();
        tracker.delete_category(category.id).unwrap();
    }

    let mut reopened = open_tracker(&base, today);
    reopened.login(UserProfile::new("alice"));
    assert!(reopened.expenses().unwrap().is_empty());
    assert!(reopened.categories().unwrap().is_empty());
}

#[test]
fn tracker_refuses_collections_with_negative_amounts() {
    let base = temp_base();
    {
        let mut tracker = open_tracker(&base, date(2025, 1, 8));
        tracker.login(UserProfile::new("alice"));
        tracker
            .add_expense(ExpenseDraft::new(25.0, "Pharmacy", Uuid::new_v4(), "2025-01-08"))
            .unwrap();
    }
    let path = PathResolver::collections_file_in(&base);
    let storage = JsonStorage::new(Some(base.clone())).unwrap();
    let mut collections = storage.load().unwrap();
    collections.expenses[0].amount = -500.0;
    save_collections_to_path(&collections, &path).unwrap();

    let result = Tracker::open(
        Box::new(JsonStorage::new(Some(base.clone())).unwrap()),
        Box::new(DirReceiptStore::new(PathResolver::receipts_dir_in(&base)).unwrap()),
        Box::new(FixedClock::new(date(2025, 1, 8))),
    );
    assert!(matches!(result, Err(TrackerError::Storage(_))));
}
