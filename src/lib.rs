//! Expense tracker - record expenses and browse them through filtered lists
//!
//! The heart of the crate is the list pipeline in [`list`]: a pure function
//! that takes an expense collection plus the active filter, sort key and
//! direction and returns the exact ordered sequence a view should render.
//! Everything else exists to feed it and to show its output.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings (including the saved view)
//! - `error`: Custom error types
//! - `models`: Expenses, categories, ids and money
//! - `list`: Filtering, sorting and totals
//! - `state`: Observable store and memoized list observers
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal and JSON rendering
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod list;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
