//! Expense CLI commands
//!
//! Implements recording, removing and listing expenses. Listing goes through
//! the state store: storage is restored into a [`Store`], a [`ListObserver`]
//! is attached for the requested scope and its latest result is rendered.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::display::{
    expense_list_json, format_expense_details, format_expense_list, format_menu,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::list::{ListScope, OrderDirection, SortKey};
use crate::models::Money;
use crate::services::{list_menu, CategoryService, CreateExpenseInput, ExpenseService};
use crate::state::{Action, ListObserver, Store};
use crate::storage::Storage;

/// Arguments for `expenses add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount (e.g. "12.50" or "1,250")
    pub amount: Money,
    /// Category name or ID (omit to leave the expense in the inbox)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
    /// Free-text description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Arguments for `expenses list`
#[derive(Args)]
pub struct ListArgs {
    /// Only uncategorized expenses
    #[arg(long, conflicts_with = "category")]
    pub inbox: bool,
    /// Only expenses in this category (name or ID)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Sort key for this listing only (date, amount, description, category)
    #[arg(short, long)]
    pub sort: Option<SortKey>,
    /// Sort direction for this listing only (asc, desc)
    #[arg(short, long)]
    pub order: Option<OrderDirection>,
    /// Ignore the saved filter for this listing
    #[arg(long)]
    pub no_filter: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Record a new expense
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let category_id = match args.category {
        Some(name) => Some(CategoryService::new(storage).require(&name)?.id),
        None => None,
    };

    let expense = ExpenseService::new(storage).create(CreateExpenseInput {
        amount: args.amount,
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        category_id,
        description: args.description,
    })?;

    let categories = CategoryService::new(storage).list()?;
    println!("Recorded expense {}", expense.id);
    print!(
        "{}",
        format_expense_details(&expense, &categories, settings)
    );
    Ok(())
}

/// Delete an expense by ID
pub fn handle_delete_command(storage: &Storage, settings: &Settings, id: &str) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expense = service
        .find(id)?
        .ok_or_else(|| ExpenseError::expense_not_found(id))?;

    service.delete(expense.id)?;
    println!(
        "Deleted expense {} ({})",
        expense.id,
        expense.amount.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Show a single expense
pub fn handle_show_command(storage: &Storage, settings: &Settings, id: &str) -> ExpenseResult<()> {
    let expense = ExpenseService::new(storage)
        .find(id)?
        .ok_or_else(|| ExpenseError::expense_not_found(id))?;
    let categories = CategoryService::new(storage).list()?;

    print!(
        "{}",
        format_expense_details(&expense, &categories, settings)
    );
    Ok(())
}

/// Show the available lists with their expense counts
pub fn handle_lists_command(storage: &Storage, json: bool) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(storage).list_all()?;
    let categories = CategoryService::new(storage).list()?;
    let menu = list_menu(&expenses, &categories);

    if json {
        println!("{}", serde_json::to_string_pretty(&menu)?);
    } else {
        print!("{}", format_menu(&menu));
    }
    Ok(())
}

/// Render one list view under the saved (or overridden) selections
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let scope = if args.inbox {
        ListScope::Inbox
    } else if let Some(name) = &args.category {
        ListScope::Category(CategoryService::new(storage).require(name)?.id)
    } else {
        ListScope::All
    };

    let mut store = Store::new();
    store.dispatch(Action::RestoreView(settings.view.clone()));
    storage.restore_into(&mut store)?;

    let (observer, subscription) = ListObserver::attach(&mut store, scope);

    if args.no_filter {
        store.dispatch(Action::ClearFilter);
    }
    if let Some(sort_by) = args.sort {
        store.dispatch(Action::SetSort(sort_by));
    }
    if let Some(order_by) = args.order {
        store.dispatch(Action::SetOrder(order_by));
    }

    store.unsubscribe(subscription);

    let categories = &store.state().categories;
    let observer = observer.borrow();
    let list = observer.current();
    tracing::debug!(
        scope = %scope,
        shown = list.len(),
        recomputations = observer.recomputations(),
        "list rendered"
    );

    if args.json {
        println!("{}", expense_list_json(list, categories, settings)?);
    } else {
        print!("{}", format_expense_list(list, categories, settings));
    }
    Ok(())
}
