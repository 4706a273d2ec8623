//! Expense model
//!
//! An expense is a single immutable spending event. Its serialized field names
//! (`id`, `category`, `amount`, `comment`, `timestampMillis`) are the persisted
//! format, so renaming a field here is a storage format change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::ExpenseId;

/// A recorded spending event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Spending category
    pub category: ExpenseCategory,

    /// Amount spent, always positive
    pub amount: f64,

    /// Free-form note, possibly empty
    #[serde(default)]
    pub comment: String,

    /// When the expense was recorded, in milliseconds since the Unix epoch
    pub timestamp_millis: i64,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        category: ExpenseCategory,
        amount: f64,
        comment: impl Into<String>,
        timestamp_millis: i64,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            category,
            amount,
            comment: comment.into(),
            timestamp_millis,
        }
    }

    /// Create an expense with an explicit id
    pub fn with_id(
        id: impl Into<ExpenseId>,
        category: ExpenseCategory,
        amount: f64,
        comment: impl Into<String>,
        timestamp_millis: i64,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            amount,
            comment: comment.into(),
            timestamp_millis,
        }
    }

    /// The timestamp as a UTC instant, if it is within chrono's range
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_millis)
    }

    /// Whether the comment has any visible content
    pub fn has_comment(&self) -> bool {
        !self.comment.trim().is_empty()
    }
}
