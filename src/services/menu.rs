//! List menu
//!
//! The entry screen lists every view with a badge counting the expenses it
//! holds: all expenses, the uncategorized inbox, then one entry per category.

use serde::Serialize;

use crate::list::ListScope;
use crate::models::{Category, Expense};

/// One menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: String,
    pub scope: ListScope,
    pub count: usize,
}

/// Build the menu from a snapshot. Badges ignore the active filter.
pub fn list_menu(expenses: &[Expense], categories: &[Category]) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(categories.len() + 2);

    entries.push(MenuEntry {
        label: "All".into(),
        scope: ListScope::All,
        count: expenses.len(),
    });
    entries.push(MenuEntry {
        label: "Default".into(),
        scope: ListScope::Inbox,
        count: expenses.iter().filter(|e| e.is_uncategorized()).count(),
    });

    for category in categories {
        let scope = ListScope::Category(category.id);
        entries.push(MenuEntry {
            label: category.name.clone(),
            scope,
            count: expenses.iter().filter(|e| scope.contains(e)).count(),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_menu_counts() {
        let food = Category::new("Food");
        let rent = Category::new("Rent");
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let expenses = vec![
            Expense::with_details(day, Money::from_units(1), Some(food.id), ""),
            Expense::with_details(day, Money::from_units(2), Some(food.id), ""),
            Expense::with_details(day, Money::from_units(3), None, ""),
            Expense::with_details(day, Money::from_units(4), Some(CategoryId::new()), ""),
        ];

        let menu = list_menu(&expenses, &[food.clone(), rent]);
        let summary: Vec<_> = menu.iter().map(|m| (m.label.as_str(), m.count)).collect();
        assert_eq!(
            summary,
            vec![("All", 4), ("Default", 1), ("Food", 2), ("Rent", 0)]
        );
        assert_eq!(menu[2].scope, ListScope::Category(food.id));
    }

    #[test]
    fn test_empty_menu() {
        let menu = list_menu(&[], &[]);
        assert_eq!(menu.len(), 2);
        assert!(menu.iter().all(|m| m.count == 0));
    }
}
