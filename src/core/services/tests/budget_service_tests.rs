use crate::core::collections::Collections;
use crate::core::services::BudgetService;
use crate::domain::{BudgetChanges, BudgetDraft, UserId};
use crate::errors::TrackerError;

#[test]
fn duplicate_months_are_allowed() {
    let mut collections = Collections::default();
    let user = UserId::new("alice");
    BudgetService::add(&mut collections, &user, BudgetDraft::new(1000.0, 4, 2025)).unwrap();
    BudgetService::add(&mut collections, &user, BudgetDraft::new(300.0, 4, 2025)).unwrap();
    BudgetService::add(&mut collections, &user, BudgetDraft::new(900.0, 5, 2025)).unwrap();

    let budgets = BudgetService::list_for_user(&collections, &user);
    assert_eq!(budgets.len(), 3);
    let april = budgets
        .iter()
        .filter(|budget| (budget.month, budget.year) == (4, 2025))
        .count();
    assert_eq!(april, 2);
}

#[test]
fn invalid_budget_rejected() {
    let mut collections = Collections::default();
    let err = BudgetService::add(
        &mut collections,
        &UserId::new("alice"),
        BudgetDraft::new(50.0, 13, 2025),
    )
    .unwrap_err();
    assert!(matches!(err, TrackerError::Validation(_)));
}

#[test]
fn update_checks_owner_then_fields() {
    let mut collections = Collections::default();
    let alice = UserId::new("alice");
    let budget =
        BudgetService::add(&mut collections, &alice, BudgetDraft::new(50.0, 1, 2025)).unwrap();

    let err = BudgetService::update(
        &mut collections,
        &UserId::new("mallory"),
        budget.id,
        BudgetChanges {
            amount: Some(1.0),
            ..BudgetChanges::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Not authorized to update this budget");

    let bad_month = BudgetChanges {
        month: Some(0),
        ..BudgetChanges::default()
    };
    assert!(BudgetService::update(&mut collections, &alice, budget.id, bad_month).is_err());

    let changes = BudgetChanges {
        amount: Some(75.0),
        month: Some(2),
        year: None,
    };
    BudgetService::update(&mut collections, &alice, budget.id, changes).unwrap();
    let stored = collections.budget(budget.id).unwrap();
    assert_eq!((stored.amount, stored.month, stored.year), (75.0, 2, 2025));
}

#[test]
fn remove_deletes_owned_budget() {
    let mut collections = Collections::default();
    let alice = UserId::new("alice");
    let budget =
        BudgetService::add(&mut collections, &alice, BudgetDraft::new(50.0, 1, 2025)).unwrap();
    let removed = BudgetService::remove(&mut collections, &alice, budget.id).unwrap();
    assert_eq!(removed.id, budget.id);
    assert!(collections.budgets.is_empty());
}
