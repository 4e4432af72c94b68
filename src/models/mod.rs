//! Core data models for the expense tracker
//!
//! Expenses, categories, their typed ids, and the money type used for
//! amounts and totals.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::Category;
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId};
pub use money::Money;
