use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::{Result, TrackerError};

const MIN_AMOUNT: f64 = 0.01;
const MIN_YEAR: i32 = 2000;

/// A spending limit for one calendar month. Several budgets may share a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: UserId,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}

impl Budget {
    pub fn new(user_id: UserId, draft: BudgetDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount: draft.amount,
            month: draft.month,
            year: draft.year,
        }
    }

    pub fn period_label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }

    /// `Budget for 3/2025: 250.00`
    pub fn display_label(&self) -> String {
        format!("Budget for {}: {:.2}", self.period_label(), self.amount)
    }

    /// Applies the draft rules to a stored budget.
    pub fn validate(&self) -> Result<()> {
        BudgetDraft::new(self.amount, self.month, self.year)
            .validate()
            .map_err(|err| TrackerError::Validation(format!("budget {}: {err}", self.id)))
    }
}

impl Owned for Budget {
    fn owner(&self) -> &UserId {
        &self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetDraft {
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}

impl BudgetDraft {
    pub fn new(amount: f64, month: u32, year: i32) -> Self {
        Self {
            amount,
            month,
            year,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)?;
        validate_month(self.month)?;
        validate_year(self.year)
    }
}

/// Partial budget update.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetChanges {
    pub amount: Option<f64>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl BudgetChanges {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        if let Some(month) = self.month {
            validate_month(month)?;
        }
        if let Some(year) = self.year {
            validate_year(year)?;
        }
        Ok(())
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < MIN_AMOUNT {
        return Err(TrackerError::Validation(
            "Amount must be greater than 0".into(),
        ));
    }
    Ok(())
}

fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(TrackerError::Validation(
            "Month must be between 1 and 12".into(),
        ));
    }
    Ok(())
}

fn validate_year(year: i32) -> Result<()> {
    if year < MIN_YEAR {
        return Err(TrackerError::Validation(format!(
            "Year must be {MIN_YEAR} or later"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_validation_covers_each_field() {
        assert!(BudgetDraft::new(1500.0, 4, 2025).validate().is_ok());
        assert!(BudgetDraft::new(0.0, 4, 2025).validate().is_err());
        assert!(BudgetDraft::new(10.0, 13, 2025).validate().is_err());
        assert!(BudgetDraft::new(10.0, 0, 2025).validate().is_err());
        assert!(BudgetDraft::new(10.0, 1, 1999).validate().is_err());
    }

    #[test]
    fn label_uses_month_slash_year() {
        let budget = Budget::new(UserId::new("u1"), BudgetDraft::new(250.0, 3, 2025));
        assert_eq!(budget.display_label(), "Budget for 3/2025: 250.00");
    }
}
