//! View selection CLI commands
//!
//! `filter` and `sort` change the saved selection that every `list` command
//! starts from. Changes go through the store's reducer and the resulting view
//! is written back to the settings file.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::{ExpensePaths, Settings};
use crate::display::format_view_state;
use crate::error::ExpenseResult;
use crate::list::{FilterCriteria, OrderDirection, SortKey};
use crate::models::Money;
use crate::services::CategoryService;
use crate::state::{Action, Store};
use crate::storage::Storage;

/// Filter subcommands
#[derive(Subcommand)]
pub enum FilterCommands {
    /// Show the saved filter and sort selection
    Show,

    /// Replace the saved filter
    Set(FilterArgs),

    /// Remove every filter constraint
    Clear,
}

/// Constraints for `expenses filter set`; omitted options are unrestricted
#[derive(Args)]
pub struct FilterArgs {
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Category name or ID to include (repeatable)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,
    /// Include uncategorized expenses alongside the chosen categories
    #[arg(long)]
    pub uncategorized: bool,
    /// Smallest amount to include
    #[arg(long)]
    pub min: Option<Money>,
    /// Largest amount to include
    #[arg(long)]
    pub max: Option<Money>,
    /// Text the description must contain (case-insensitive)
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for `expenses sort`
#[derive(Args)]
pub struct SortArgs {
    /// Sort key (date, amount, description, category)
    pub key: SortKey,
    /// Sort direction (asc, desc); unchanged when omitted
    #[arg(short, long)]
    pub order: Option<OrderDirection>,
}

impl FilterArgs {
    fn into_criteria(self, storage: &Storage) -> ExpenseResult<FilterCriteria> {
        let service = CategoryService::new(storage);
        let mut criteria = FilterCriteria::new();

        if let Some(from) = self.from {
            criteria = criteria.from_date(from);
        }
        if let Some(to) = self.to {
            criteria = criteria.to_date(to);
        }
        for name in &self.categories {
            criteria = criteria.category(service.require(name)?.id);
        }
        if self.uncategorized {
            criteria = criteria.uncategorized();
        }
        if let Some(min) = self.min {
            criteria = criteria.min_amount(min);
        }
        if let Some(max) = self.max {
            criteria = criteria.max_amount(max);
        }
        if let Some(text) = self.text {
            criteria = criteria.text(text);
        }

        Ok(criteria)
    }
}

/// Apply `actions` to the saved view and persist the result
fn update_view(
    paths: &ExpensePaths,
    settings: &mut Settings,
    actions: Vec<Action>,
) -> ExpenseResult<()> {
    let mut store = Store::new();
    store.dispatch(Action::RestoreView(settings.view.clone()));
    for action in actions {
        store.dispatch(action);
    }

    settings.view = store.state().view.clone();
    settings.save(paths)
}

/// Handle a filter command
pub fn handle_filter_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: FilterCommands,
) -> ExpenseResult<()> {
    let categories = CategoryService::new(storage).list()?;

    match cmd {
        FilterCommands::Show => {}
        FilterCommands::Set(args) => {
            let criteria = args.into_criteria(storage)?;
            update_view(storage.paths(), settings, vec![Action::SetFilter(criteria)])?;
            println!("Filter saved.");
        }
        FilterCommands::Clear => {
            update_view(storage.paths(), settings, vec![Action::ClearFilter])?;
            println!("Filter cleared.");
        }
    }

    print!("{}", format_view_state(&settings.view, &categories, settings));
    Ok(())
}

/// Handle `expenses sort`
pub fn handle_sort_command(
    storage: &Storage,
    settings: &mut Settings,
    args: SortArgs,
) -> ExpenseResult<()> {
    let mut actions = vec![Action::SetSort(args.key)];
    if let Some(order_by) = args.order {
        actions.push(Action::SetOrder(order_by));
    }
    update_view(storage.paths(), settings, actions)?;

    let categories = CategoryService::new(storage).list()?;
    print!("{}", format_view_state(&settings.view, &categories, settings));
    Ok(())
}
