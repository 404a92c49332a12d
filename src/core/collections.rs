use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Budget, Category, ExpenseRecord};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Every stored record, across all users. Services filter by owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collections {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            expenses: Vec::new(),
            categories: Vec::new(),
            budgets: Vec::new(),
        }
    }
}

impl Collections {
    pub fn expense(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut ExpenseRecord> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.id == id)
    }

    pub fn budget_mut(&mut self, id: Uuid) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|budget| budget.id == id)
    }
}
