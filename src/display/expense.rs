//! Expense list rendering
//!
//! Renders a processed list as a total header followed by a table of rows,
//! or as a JSON document for scripting.

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::config::Settings;
use crate::list::{ExpenseListView, ListScope};
use crate::models::{Category, Expense};

/// Header shown above a list, e.g. `Total 'Food' Expenses`
pub fn list_title(scope: ListScope, categories: &[Category]) -> String {
    match scope {
        ListScope::All | ListScope::Inbox => "Total Expenses".to_string(),
        ListScope::Category(id) => {
            let name = categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.as_str())
                .unwrap_or("Unknown");
            format!("Total '{}' Expenses", name)
        }
    }
}

/// Category column text for one expense
fn category_label(expense: &Expense, categories: &[Category]) -> String {
    match expense.category_id {
        None => "-".to_string(),
        Some(id) => categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("(deleted {})", id)),
    }
}

/// Render a list with its total header
///
/// The category column is left out for single-category and inbox views,
/// where it would be the same on every row.
pub fn format_expense_list(
    list: &ExpenseListView,
    categories: &[Category],
    settings: &Settings,
) -> String {
    let mut output = format!(
        "{}: {}\n",
        list_title(list.scope, categories),
        list.total.format_with_symbol(&settings.currency_symbol)
    );

    if list.is_empty() {
        output.push_str("\nNo expenses found.\n");
        return output;
    }

    let show_category = matches!(list.scope, ListScope::All);

    let mut builder = Builder::default();
    let mut header = vec!["ID", "Date", "Description"];
    if show_category {
        header.push("Category");
    }
    header.push("Amount");
    let amount_column = header.len() - 1;
    builder.push_record(header);

    for expense in &list.expenses {
        let mut row = vec![
            expense.id.short(),
            expense.date.format(&settings.date_format).to_string(),
            expense.description.clone(),
        ];
        if show_category {
            row.push(category_label(expense, categories));
        }
        row.push(expense.amount.format_with_symbol(&settings.currency_symbol));
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::single(amount_column), Alignment::right());

    output.push('\n');
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

#[derive(Serialize)]
struct JsonExpense<'a> {
    id: String,
    date: String,
    description: &'a str,
    category: Option<String>,
    amount: i64,
}

#[derive(Serialize)]
struct JsonList<'a> {
    title: String,
    scope: ListScope,
    count: usize,
    total: i64,
    total_display: String,
    expenses: Vec<JsonExpense<'a>>,
}

/// Render a list as pretty JSON. Amounts are in minor units.
pub fn expense_list_json(
    list: &ExpenseListView,
    categories: &[Category],
    settings: &Settings,
) -> serde_json::Result<String> {
    let expenses = list
        .expenses
        .iter()
        .map(|e| JsonExpense {
            id: e.id.as_uuid().to_string(),
            date: e.date.format("%Y-%m-%d").to_string(),
            description: &e.description,
            category: e.category_id.map(|_| category_label(e, categories)),
            amount: e.amount.cents(),
        })
        .collect();

    serde_json::to_string_pretty(&JsonList {
        title: list_title(list.scope, categories),
        scope: list.scope,
        count: list.len(),
        total: list.total.cents(),
        total_display: list.total.format_with_symbol(&settings.currency_symbol),
        expenses,
    })
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, categories: &[Category], settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!(
        "  Date:        {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "  Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "  Category:    {}\n",
        match expense.category_id {
            None => "(uncategorized)".to_string(),
            Some(_) => category_label(expense, categories),
        }
    ));

    if !expense.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", expense.description));
    }

    output
}
