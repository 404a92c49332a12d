//! User-defined expense categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::{Result, TrackerError};

/// Label shown for expenses whose category no longer resolves.
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
}

impl Category {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
        }
    }

    /// Ensures the name is between 3 and 50 characters once trimmed.
    pub fn validate_name(name: &str) -> Result<()> {
        let len = name.trim().chars().count();
        if len < NAME_MIN_CHARS {
            return Err(TrackerError::Validation(format!(
                "Name must be at least {NAME_MIN_CHARS} characters long"
            )));
        }
        if len > NAME_MAX_CHARS {
            return Err(TrackerError::Validation(format!(
                "Name must not exceed {NAME_MAX_CHARS} characters"
            )));
        }
        Ok(())
    }
}

impl Owned for Category {
    fn owner(&self) -> &UserId {
        &self.user_id
    }
}

/// Partial category update.
#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
}
