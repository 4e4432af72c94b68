//! Expense list processing
//!
//! Turns a raw expense collection plus the active view selections into the
//! ordered, filtered list a view renders, and the total shown above it.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_tracker::list::{process, total, FilterCriteria, OrderDirection, SortKey};
//! use expense_tracker::models::{Category, Expense, Money};
//!
//! let food = Category::new("Food");
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let expenses = vec![
//!     Expense::with_details(day, Money::from_units(100), Some(food.id), "groceries"),
//!     Expense::with_details(day, Money::from_units(50), None, "bus"),
//! ];
//!
//! let shown = process(
//!     &expenses,
//!     &FilterCriteria::new().category(food.id),
//!     SortKey::Date,
//!     OrderDirection::Asc,
//!     &[food],
//! );
//! assert_eq!(shown.len(), 1);
//! assert_eq!(total(&shown), Money::from_units(100));
//! ```

pub mod filter;
pub mod processor;
pub mod sort;
pub mod view;

pub use filter::{FilterCriteria, ResolvedFilter};
pub use processor::{process, process_scoped, total, ListScope};
pub use sort::{sort_expenses, OrderDirection, SortKey, UnknownSortValue};
pub use view::{ExpenseListView, ViewState};
