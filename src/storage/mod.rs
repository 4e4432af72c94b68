//! Storage layer for the expense tracker
//!
//! JSON file storage with atomic writes. `Storage` restores the store's
//! snapshot on startup and persists changes made through the services.

pub mod categories;
pub mod expenses;
pub mod file_io;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::state::{Action, Store};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Publish the stored records into `store`
    pub fn restore_into(&self, store: &mut Store) -> Result<(), ExpenseError> {
        store.dispatch(Action::RestoreCategories(self.categories.get_all()?));
        store.dispatch(Action::RestoreExpenses(self.expenses.get_all()?));
        Ok(())
    }
}
