//! Category service
//!
//! Provides business logic for the category catalog: creation from a
//! user-supplied name, lookup, and deletion.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryId};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, name: &str) -> ExpenseResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExpenseError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(ExpenseError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(name);
        category
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.categories.insert(category.clone())?;
        self.storage.categories.save()?;

        tracing::info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    pub fn get(&self, id: CategoryId) -> ExpenseResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<Category>> {
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        let mut matches: Vec<Category> = self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .filter(|c| c.id.matches(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(ExpenseError::Validation(format!(
                "'{}' matches {} categories; use the name or a longer id",
                identifier, n
            ))),
        }
    }

    /// Find a category or fail with a not-found error
    pub fn require(&self, identifier: &str) -> ExpenseResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| ExpenseError::category_not_found(identifier))
    }

    /// The catalog in creation order
    pub fn list(&self) -> ExpenseResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Delete a category
    ///
    /// Expenses assigned to it are left untouched and keep the old id.
    /// Returns how many expenses were referencing it.
    pub fn delete(&self, id: CategoryId) -> ExpenseResult<usize> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| ExpenseError::category_not_found(id.to_string()))?;

        let orphaned = self.storage.expenses.count_in_category(id)?;

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        if orphaned > 0 {
            tracing::warn!(
                name = %category.name,
                orphaned,
                "category deleted while expenses still reference it"
            );
        } else {
            tracing::info!(name = %category.name, "category deleted");
        }
        Ok(orphaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service.create("  Groceries ").unwrap();
        assert_eq!(category.name, "Groceries");
        assert_eq!(service.list().unwrap(), vec![category]);
    }

    #[test]
    fn test_create_rejects_empty_and_duplicate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        assert!(service.create("   ").unwrap_err().is_validation());

        service.create("Food").unwrap();
        assert!(matches!(
            service.create("food"),
            Err(ExpenseError::Duplicate { .. })
        ));
        assert!(service.create(&"x".repeat(51)).unwrap_err().is_validation());
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let rent = service.create("Rent").unwrap();

        assert_eq!(service.find("rent").unwrap(), Some(rent.clone()));
        assert_eq!(service.find(&rent.id.to_string()).unwrap(), Some(rent.clone()));
        assert!(service.find("Travel").unwrap().is_none());
        assert!(service.require("Travel").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_leaves_expenses_dangling() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let food = service.create("Food").unwrap();

        let expense = Expense::with_details(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Money::from_units(5),
            Some(food.id),
            "",
        );
        storage.expenses.insert(expense.clone()).unwrap();

        assert_eq!(service.delete(food.id).unwrap(), 1);
        assert!(service.list().unwrap().is_empty());
        assert_eq!(
            storage.expenses.get(expense.id).unwrap().unwrap().category_id,
            Some(food.id)
        );
    }
}
