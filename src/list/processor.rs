//! The expense list pipeline
//!
//! `process` is a pure function: scope, filter, then stable sort. It performs
//! no I/O and keeps no state, so callers may re-run it on every change or
//! memoize it on its inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::filter::FilterCriteria;
use super::sort::{sort_expenses, OrderDirection, SortKey};
use crate::models::{Category, CategoryId, Expense, Money};

/// Which slice of the expense collection a list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ListScope {
    /// Every expense
    #[default]
    All,
    /// Expenses without a category
    Inbox,
    /// Expenses assigned to one category
    Category(CategoryId),
}

impl ListScope {
    /// Whether an expense belongs to this scope
    pub fn contains(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Inbox => expense.category_id.is_none(),
            Self::Category(id) => expense.category_id == Some(*id),
        }
    }
}

impl fmt::Display for ListScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Inbox => write!(f, "inbox"),
            Self::Category(id) => write!(f, "category {}", id),
        }
    }
}

/// Filter and order an expense collection for display
///
/// Returns the expenses that satisfy every active constraint in `filter_by`,
/// stably sorted by `sort_by` in direction `order_by`. `categories` is used
/// to resolve category constraints and category names; expenses pointing at
/// a category missing from it are never dropped because of that.
pub fn process(
    expenses: &[Expense],
    filter_by: &FilterCriteria,
    sort_by: SortKey,
    order_by: OrderDirection,
    categories: &[Category],
) -> Vec<Expense> {
    process_scoped(expenses, ListScope::All, filter_by, sort_by, order_by, categories)
}

/// [`process`] with the view's scope applied before filtering
pub fn process_scoped(
    expenses: &[Expense],
    scope: ListScope,
    filter_by: &FilterCriteria,
    sort_by: SortKey,
    order_by: OrderDirection,
    categories: &[Category],
) -> Vec<Expense> {
    let filter = filter_by.resolve(categories);

    let mut selected: Vec<Expense> = expenses
        .iter()
        .filter(|e| scope.contains(e) && filter.matches(e))
        .cloned()
        .collect();

    sort_expenses(&mut selected, sort_by, order_by, categories);
    selected
}

/// Sum of the amounts of `expenses`; zero for an empty list
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}
