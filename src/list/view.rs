//! View selections and the rendered list they produce

use serde::{Deserialize, Serialize};

use super::filter::FilterCriteria;
use super::processor::{process_scoped, total, ListScope};
use super::sort::{OrderDirection, SortKey};
use crate::models::{Category, Expense, Money};

/// The active filter/sort/order selection shared by every list view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub filter_by: FilterCriteria,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub order_by: OrderDirection,
}

/// A processed list ready for rendering: the ordered expenses and their total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseListView {
    pub scope: ListScope,
    pub expenses: Vec<Expense>,
    pub total: Money,
}

impl ExpenseListView {
    /// Run the pipeline for `scope` under the selections in `view`
    pub fn build(
        expenses: &[Expense],
        scope: ListScope,
        view: &ViewState,
        categories: &[Category],
    ) -> Self {
        let expenses = process_scoped(
            expenses,
            scope,
            &view.filter_by,
            view.sort_by,
            view.order_by,
            categories,
        );
        let total = total(&expenses);
        Self {
            scope,
            expenses,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_carries_total() {
        let food = Category::new("Food");
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let expenses = vec![
            Expense::with_details(day, Money::from_cents(1250), Some(food.id), "lunch"),
            Expense::with_details(day, Money::from_cents(750), None, "bus"),
            Expense::with_details(day, Money::from_cents(300), Some(food.id), "snack"),
        ];
        let view = ViewState {
            sort_by: SortKey::Amount,
            ..ViewState::default()
        };

        let list = ExpenseListView::build(&expenses, ListScope::Category(food.id), &view, &[food]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.expenses[0].description, "snack");
        assert_eq!(list.total, Money::from_cents(1550));
    }

    #[test]
    fn test_empty_view() {
        let list = ExpenseListView::build(&[], ListScope::Inbox, &ViewState::default(), &[]);
        assert!(list.is_empty());
        assert_eq!(list.total, Money::zero());
    }
}
