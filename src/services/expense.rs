//! Expense service
//!
//! Business logic for recording and removing expenses. Validation happens
//! here, at creation time; the list pipeline never rejects a record.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryId, Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub date: NaiveDate,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn create(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        if let Some(cat_id) = input.category_id {
            self.storage
                .categories
                .get(cat_id)?
                .ok_or_else(|| ExpenseError::category_not_found(cat_id.to_string()))?;
        }

        let description = input
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();
        let expense =
            Expense::with_details(input.date, input.amount, input.category_id, description);

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;

        tracing::info!(
            id = %expense.id,
            amount = %expense.amount,
            date = %expense.date,
            "expense recorded"
        );
        Ok(expense)
    }

    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full id, display id (`exp-1a2b3c4d`) or id prefix
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<Expense>> {
        let mut matches = self.storage.expenses.find_matching(identifier)?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(ExpenseError::Validation(format!(
                "'{}' matches {} expenses; use a longer id",
                identifier, n
            ))),
        }
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        self.storage.expenses.delete(id)?;
        self.storage.expenses.save()?;

        tracing::info!(id = %id, "expense deleted");
        Ok(expense)
    }
}
