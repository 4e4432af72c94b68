//! List observers
//!
//! A `ListObserver` follows the store for one list view and keeps its
//! processed list current. It only re-runs the pipeline when the expenses,
//! the categories or the view selections changed since its last run.

use std::cell::RefCell;
use std::rc::Rc;

use super::store::{AppState, Revisions, Store, SubscriptionId};
use crate::list::{ExpenseListView, ListScope, ViewState};

/// Memoized list for one scope
#[derive(Debug)]
pub struct ListObserver {
    scope: ListScope,
    inputs: Option<(Revisions, ViewState)>,
    current: ExpenseListView,
    recomputations: usize,
}

impl ListObserver {
    pub fn new(scope: ListScope) -> Self {
        Self {
            scope,
            inputs: None,
            current: ExpenseListView {
                scope,
                expenses: Vec::new(),
                total: Default::default(),
            },
            recomputations: 0,
        }
    }

    /// Subscribe a new observer for `scope` to `store`
    pub fn attach(store: &mut Store, scope: ListScope) -> (Rc<RefCell<Self>>, SubscriptionId) {
        let observer = Rc::new(RefCell::new(Self::new(scope)));
        let handle = Rc::clone(&observer);
        let id = store.subscribe(move |state| handle.borrow_mut().update(state));
        (observer, id)
    }

    /// Bring the list up to date with `state`
    pub fn update(&mut self, state: &AppState) {
        let inputs = (state.revisions(), state.view.clone());
        if self.inputs.as_ref() == Some(&inputs) {
            return;
        }

        self.current =
            ExpenseListView::build(&state.expenses, self.scope, &state.view, &state.categories);
        self.inputs = Some(inputs);
        self.recomputations += 1;

        tracing::trace!(
            scope = %self.scope,
            shown = self.current.len(),
            total = %self.current.total,
            "list recomputed"
        );
    }

    /// The latest processed list
    pub fn current(&self) -> &ExpenseListView {
        &self.current
    }

    /// How many times the pipeline has run
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
