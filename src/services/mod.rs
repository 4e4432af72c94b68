//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and cross-entity checks.

pub mod category;
pub mod expense;
pub mod menu;

pub use category::CategoryService;
pub use expense::{CreateExpenseInput, ExpenseService};
pub use menu::{list_menu, MenuEntry};
