//! Observable application state
//!
//! `Store` owns the current snapshot of expenses, categories and view
//! selections. State changes only through [`Store::dispatch`]; after every
//! dispatch each subscriber is called with the new snapshot.

use crate::list::{FilterCriteria, OrderDirection, SortKey, ViewState};
use crate::models::{Category, CategoryId, Expense, ExpenseId};

/// Snapshot of everything the list views read
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
    pub view: ViewState,
    revisions: Revisions,
}

/// Per-slice change counters, bumped whenever a slice is replaced or edited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Revisions {
    pub expenses: u64,
    pub categories: u64,
}

impl AppState {
    pub fn revisions(&self) -> Revisions {
        self.revisions
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// A state transition
#[derive(Debug, Clone)]
pub enum Action {
    RestoreExpenses(Vec<Expense>),
    RestoreCategories(Vec<Category>),
    RestoreView(ViewState),
    AddExpense(Expense),
    DeleteExpense(ExpenseId),
    AddCategory(Category),
    DeleteCategory(CategoryId),
    SetFilter(FilterCriteria),
    ClearFilter,
    SetSort(SortKey),
    SetOrder(OrderDirection),
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Self::RestoreExpenses(_) => "restore_expenses",
            Self::RestoreCategories(_) => "restore_categories",
            Self::RestoreView(_) => "restore_view",
            Self::AddExpense(_) => "add_expense",
            Self::DeleteExpense(_) => "delete_expense",
            Self::AddCategory(_) => "add_category",
            Self::DeleteCategory(_) => "delete_category",
            Self::SetFilter(_) => "set_filter",
            Self::ClearFilter => "clear_filter",
            Self::SetSort(_) => "set_sort",
            Self::SetOrder(_) => "set_order",
        }
    }
}

/// Apply `action` to `state`
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::RestoreExpenses(expenses) => {
            state.expenses = expenses;
            state.revisions.expenses += 1;
        }
        Action::RestoreCategories(categories) => {
            state.categories = categories;
            state.revisions.categories += 1;
        }
        Action::RestoreView(view) => state.view = view,
        Action::AddExpense(expense) => {
            state.expenses.push(expense);
            state.revisions.expenses += 1;
        }
        Action::DeleteExpense(id) => {
            let before = state.expenses.len();
            state.expenses.retain(|e| e.id != id);
            if state.expenses.len() != before {
                state.revisions.expenses += 1;
            }
        }
        Action::AddCategory(category) => {
            state.categories.push(category);
            state.revisions.categories += 1;
        }
        // Expenses keep their reference; the list pipeline tolerates it
        Action::DeleteCategory(id) => {
            let before = state.categories.len();
            state.categories.retain(|c| c.id != id);
            if state.categories.len() != before {
                state.revisions.categories += 1;
            }
        }
        Action::SetFilter(filter) => state.view.filter_by = filter,
        Action::ClearFilter => state.view.filter_by = FilterCriteria::default(),
        Action::SetSort(sort_by) => state.view.sort_by = sort_by,
        Action::SetOrder(order_by) => state.view.order_by = order_by,
    }
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState)>;

/// Holds the application state and notifies subscribers of every change
#[derive(Default)]
pub struct Store {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action and publish the resulting snapshot
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        reduce(&mut self.state, action);

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Register a listener; it is called immediately with the current snapshot
    pub fn subscribe(&mut self, mut listener: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        listener(&self.state);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn expense(units: i64) -> Expense {
        Expense::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), Money::from_units(units))
    }

    #[test]
    fn test_reduce_tracks_revisions() {
        let mut state = AppState::default();
        reduce(&mut state, Action::AddExpense(expense(1)));
        reduce(&mut state, Action::AddCategory(Category::new("Food")));
        assert_eq!(state.revisions(), Revisions { expenses: 1, categories: 1 });

        reduce(&mut state, Action::SetSort(SortKey::Amount));
        assert_eq!(state.revisions(), Revisions { expenses: 1, categories: 1 });
        assert_eq!(state.view.sort_by, SortKey::Amount);

        reduce(&mut state, Action::DeleteExpense(ExpenseId::new()));
        assert_eq!(state.revisions().expenses, 1);
    }

    #[test]
    fn test_delete_category_keeps_expense_reference() {
        let food = Category::new("Food");
        let mut e = expense(5);
        e.category_id = Some(food.id);

        let mut state = AppState::default();
        reduce(&mut state, Action::AddCategory(food.clone()));
        reduce(&mut state, Action::AddExpense(e));
        reduce(&mut state, Action::DeleteCategory(food.id));

        assert!(state.categories.is_empty());
        assert_eq!(state.expenses[0].category_id, Some(food.id));
        assert!(state.category(food.id).is_none());
    }

    #[test]
    fn test_subscribers_receive_snapshots() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new();

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.expenses.len()));

        store.dispatch(Action::AddExpense(expense(1)));
        store.dispatch(Action::AddExpense(expense(2)));
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Action::ClearFilter);
        assert_eq!(seen.borrow().len(), 3);
    }
}
