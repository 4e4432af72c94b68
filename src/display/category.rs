//! Category and menu display formatting

use crate::models::Category;
use crate::services::MenuEntry;

/// Format the list menu with expense counts
pub fn format_menu(entries: &[MenuEntry]) -> String {
    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut output = String::new();
    let mut printed_categories_header = false;

    for entry in entries {
        if matches!(entry.scope, crate::list::ListScope::Category(_)) && !printed_categories_header {
            output.push_str("\nCategories\n");
            printed_categories_header = true;
        }
        output.push_str(&format!(
            "  {:<width$}  {:>5}\n",
            entry.label,
            entry.count,
            width = label_width
        ));
    }

    if !printed_categories_header {
        output.push_str("\nNo categories yet. Run 'expenses category add <name>' to create one.\n");
    }

    output
}

/// Format the category catalog
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  {}\n", "Name", "ID", width = name_width));
    output.push_str(&format!("{:-<width$}  {:-<12}\n", "", "", width = name_width));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            category.name,
            category.id,
            width = name_width
        ));
    }

    output
}
