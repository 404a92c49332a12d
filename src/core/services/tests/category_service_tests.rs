use uuid::Uuid;

use crate::core::collections::Collections;
use crate::core::services::CategoryService;
use crate::domain::{CategoryChanges, UserId, UNKNOWN_CATEGORY};
use crate::errors::TrackerError;

#[test]
fn add_category_succeeds() {
    let mut collections = Collections::default();
    let user = UserId::new("alice");
    let category = CategoryService::add(&mut collections, &user, "  Groceries ").unwrap();

    assert_eq!(category.name, "Groceries");
    assert_eq!(CategoryService::list_for_user(&collections, &user).len(), 1);
    assert!(CategoryService::list_for_user(&collections, &UserId::new("bob")).is_empty());
}

#[test]
fn short_name_rejected() {
    let mut collections = Collections::default();
    let err = CategoryService::add(&mut collections, &UserId::new("alice"), "ab").unwrap_err();
    assert!(matches!(err, TrackerError::Validation(_)));
    assert!(collections.categories.is_empty());
}

#[test]
fn update_and_remove_require_ownership() {
    let mut collections = Collections::default();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    let category = CategoryService::add(&mut collections, &alice, "Health").unwrap();

    let rename = CategoryChanges {
        name: Some("Pharmacy".into()),
    };
    let err = CategoryService::update(&mut collections, &bob, category.id, rename.clone())
        .unwrap_err();
    assert!(matches!(err, TrackerError::Unauthorized(_)));
    assert!(CategoryService::remove(&mut collections, &bob, category.id).is_err());

    CategoryService::update(&mut collections, &alice, category.id, rename).unwrap();
    assert_eq!(CategoryService::category_name(&collections, category.id), "Pharmacy");

    CategoryService::remove(&mut collections, &alice, category.id).unwrap();
    assert!(collections.categories.is_empty());
}

#[test]
fn unknown_category_name_falls_back() {
    let collections = Collections::default();
    assert_eq!(
        CategoryService::category_name(&collections, Uuid::new_v4()),
        UNKNOWN_CATEGORY
    );
}
