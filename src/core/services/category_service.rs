use uuid::Uuid;

use crate::core::collections::Collections;
use crate::domain::{Category, CategoryChanges, Owned, UserId, UNKNOWN_CATEGORY};
use crate::errors::TrackerError;

use super::{authorize, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    pub fn add(
        collections: &mut Collections,
        user: &UserId,
        name: &str,
    ) -> ServiceResult<Category> {
        Category::validate_name(name)?;
        let category = Category::new(user.clone(), name.trim());
        collections.categories.push(category.clone());
        Ok(category)
    }

    pub fn list_for_user<'a>(collections: &'a Collections, user: &UserId) -> Vec<&'a Category> {
        collections
            .categories
            .iter()
            .filter(|category| category.is_owned_by(user))
            .collect()
    }

    pub fn update(
        collections: &mut Collections,
        user: &UserId,
        id: Uuid,
        changes: CategoryChanges,
    ) -> ServiceResult<()> {
        authorize(collections.category(id), user, "update this category", id)?;
        if let Some(name) = &changes.name {
            Category::validate_name(name)?;
        }
        if let (Some(category), Some(name)) = (collections.category_mut(id), changes.name) {
            category.name = name.trim().to_string();
        }
        Ok(())
    }

    /// Expenses that still point at the category keep their id and display as
    /// the unknown category afterwards.
    pub fn remove(collections: &mut Collections, user: &UserId, id: Uuid) -> ServiceResult<Category> {
        authorize(collections.category(id), user, "delete this category", id)?;
        let index = collections
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| TrackerError::NotFound(format!("category {id}")))?;
        Ok(collections.categories.remove(index))
    }

    pub fn category_name(collections: &Collections, id: Uuid) -> &str {
        collections
            .category(id)
            .map(|category| category.name.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }
}
