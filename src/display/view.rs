//! View state display

use crate::config::Settings;
use crate::list::ViewState;
use crate::models::Category;

/// Describe the active sort and filter selection
pub fn format_view_state(view: &ViewState, categories: &[Category], settings: &Settings) -> String {
    let mut output = format!("Sort:   {} ({})\n", view.sort_by, view.order_by);

    let filter = &view.filter_by;
    if filter.is_empty() {
        output.push_str("Filter: none\n");
        return output;
    }

    output.push_str("Filter:\n");

    if filter.from.is_some() || filter.to.is_some() {
        let from = filter
            .from
            .map(|d| d.format(&settings.date_format).to_string())
            .unwrap_or_else(|| "…".into());
        let to = filter
            .to
            .map(|d| d.format(&settings.date_format).to_string())
            .unwrap_or_else(|| "…".into());
        output.push_str(&format!("  Dates:       {} to {}\n", from, to));
    }

    if !filter.categories.is_empty() || filter.include_uncategorized {
        let mut names: Vec<String> = filter
            .categories
            .iter()
            .map(|id| {
                categories
                    .iter()
                    .find(|c| c.id == *id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| format!("{} (deleted, ignored)", id))
            })
            .collect();
        if filter.include_uncategorized {
            names.push("(uncategorized)".into());
        }
        output.push_str(&format!("  Categories:  {}\n", names.join(", ")));
    }

    if filter.min_amount.is_some() || filter.max_amount.is_some() {
        let symbol = &settings.currency_symbol;
        let min = filter
            .min_amount
            .map(|m| m.format_with_symbol(symbol))
            .unwrap_or_else(|| "…".into());
        let max = filter
            .max_amount
            .map(|m| m.format_with_symbol(symbol))
            .unwrap_or_else(|| "…".into());
        output.push_str(&format!("  Amounts:     {} to {}\n", min, max));
    }

    if let Some(text) = filter.text.as_deref().filter(|t| !t.trim().is_empty()) {
        output.push_str(&format!("  Description: contains \"{}\"\n", text.trim()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{FilterCriteria, OrderDirection, SortKey};
    use crate::models::{CategoryId, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_default_view() {
        let output = format_view_state(&ViewState::default(), &[], &Settings::default());
        assert_eq!(output, "Sort:   date (asc)\nFilter: none\n");
    }

    #[test]
    fn test_full_filter() {
        let food = Category::new("Food");
        let view = ViewState {
            filter_by: FilterCriteria::new()
                .from_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                .category(food.id)
                .category(CategoryId::new())
                .uncategorized()
                .min_amount(Money::from_units(10))
                .text(" coffee "),
            sort_by: SortKey::Amount,
            order_by: OrderDirection::Desc,
        };

        let output = format_view_state(&view, &[food], &Settings::default());
        assert!(output.starts_with("Sort:   amount (desc)\n"));
        assert!(output.contains("Dates:       2024-01-01 to …"));
        assert!(output.contains("Food, cat-"));
        assert!(output.contains("(deleted, ignored), (uncategorized)"));
        assert!(output.contains("Amounts:     ৳10.00 to …"));
        assert!(output.contains("contains \"coffee\""));
    }
}
