//! Expense records and the drafts used to create or edit them.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::{Result, TrackerError};

const MIN_AMOUNT: f64 = 0.01;
const MIN_DESCRIPTION_CHARS: usize = 3;

/// A single spending entry as stored for its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub category_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl ExpenseRecord {
    pub fn new(
        user_id: UserId,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
        category_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            date,
            description: description.into(),
            category_id,
            receipt: None,
        }
    }

    /// Checks a record read back from storage. Stored amounts may be zero but
    /// never negative or non-finite.
    pub fn validate_stored(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(TrackerError::Validation(format!(
                "expense {} has invalid amount {}",
                self.id, self.amount
            )));
        }
        Ok(())
    }
}

impl Owned for ExpenseRecord {
    fn owner(&self) -> &UserId {
        &self.user_id
    }
}

/// Receipt file attached to a create or update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ReceiptUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(TrackerError::Validation(
                "Invalid file type for receipt".into(),
            ));
        }
        Ok(())
    }
}

/// Unvalidated input for a new expense. `date` is the raw ISO-8601 string.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub description: String,
    pub category_id: Uuid,
    pub date: String,
    pub receipt: Option<ReceiptUpload>,
}

impl ExpenseDraft {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category_id: Uuid,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category_id,
            date: date.into(),
            receipt: None,
        }
    }

    pub fn with_receipt(mut self, receipt: ReceiptUpload) -> Self {
        self.receipt = Some(receipt);
        self
    }

    /// Checks every field and returns the parsed date.
    pub fn validate(&self) -> Result<NaiveDate> {
        validate_amount(self.amount)?;
        validate_description(&self.description)?;
        validate_category(self.category_id)?;
        if let Some(receipt) = &self.receipt {
            receipt.validate()?;
        }
        parse_expense_date(&self.date)
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub date: Option<String>,
    pub receipt: Option<ReceiptUpload>,
}

impl ExpenseChanges {
    /// Validates the supplied fields and returns the parsed date, if one was given.
    pub fn validate(&self) -> Result<Option<NaiveDate>> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(category_id) = self.category_id {
            validate_category(category_id)?;
        }
        if let Some(receipt) = &self.receipt {
            receipt.validate()?;
        }
        self.date.as_deref().map(parse_expense_date).transpose()
    }
}

/// Parses an ISO-8601 calendar date (`2025-01-08`). A full RFC 3339 timestamp is
/// accepted too; only its calendar date is kept.
pub fn parse_expense_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation("Date is required".into()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| TrackerError::Validation(format!("`{trimmed}` is not a valid ISO-8601 date")))
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < MIN_AMOUNT {
        return Err(TrackerError::Validation(
            "Amount must be greater than 0".into(),
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(TrackerError::Validation(format!(
            "Description must be at least {MIN_DESCRIPTION_CHARS} characters long"
        )));
    }
    Ok(())
}

fn validate_category(category_id: Uuid) -> Result<()> {
    if category_id.is_nil() {
        return Err(TrackerError::Validation("Category is required".into()));
    }
    Ok(())
}
