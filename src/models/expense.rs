//! Expense model
//!
//! A single recorded outflow. Expenses are immutable once created; the only
//! lifecycle events are creation and deletion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (expected non-negative)
    pub amount: Money,

    /// Category, or None for inbox expenses
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// Date the expense occurred
    pub date: NaiveDate,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new uncategorized expense
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category_id: None,
            date,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Create an expense with all user-facing fields
    pub fn with_details(
        date: NaiveDate,
        amount: Money,
        category_id: Option<CategoryId>,
        description: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(date, amount);
        expense.category_id = category_id;
        expense.description = description.into();
        expense
    }

    /// Whether this expense belongs in the inbox
    pub fn is_uncategorized(&self) -> bool {
        self.category_id.is_none()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative ({})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
