//! Filter criteria for expense lists
//!
//! A `FilterCriteria` is a set of optional constraints. Each unset constraint
//! places no restriction on its dimension. Before evaluation the criteria are
//! resolved against the category catalog, which decides how category
//! constraints treat ids the catalog no longer knows.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryId, Expense, Money};

/// User-selected constraints narrowing which expenses are shown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Earliest date to include (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,

    /// Latest date to include (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,

    /// Categories to include
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryId>,

    /// Include expenses with no category alongside `categories`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub include_uncategorized: bool,

    /// Smallest amount to include (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Money>,

    /// Largest amount to include (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Money>,

    /// Case-insensitive substring of the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl FilterCriteria {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to dates on or after `from`
    pub fn from_date(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Restrict to dates on or before `to`
    pub fn to_date(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Restrict to an inclusive date range
    pub fn date_range(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from_date(from).to_date(to)
    }

    /// Add a category to the category constraint
    pub fn category(mut self, category_id: CategoryId) -> Self {
        if !self.categories.contains(&category_id) {
            self.categories.push(category_id);
        }
        self
    }

    /// Let uncategorized expenses through the category constraint
    pub fn uncategorized(mut self) -> Self {
        self.include_uncategorized = true;
        self
    }

    /// Restrict to amounts of at least `min`
    pub fn min_amount(mut self, min: Money) -> Self {
        self.min_amount = Some(min);
        self
    }

    /// Restrict to amounts of at most `max`
    pub fn max_amount(mut self, max: Money) -> Self {
        self.max_amount = Some(max);
        self
    }

    /// Restrict to descriptions containing `text`
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// True when no constraint is set, so every expense passes
    pub fn is_empty(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.categories.is_empty()
            && !self.include_uncategorized
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.normalized_text().is_none()
    }

    fn normalized_text(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// Resolve the criteria against the category catalog
    ///
    /// Ids in `categories` that the catalog does not know are dropped. If
    /// nothing is left and uncategorized expenses were not requested, the
    /// category constraint is inactive.
    pub fn resolve(&self, catalog: &[Category]) -> ResolvedFilter {
        let known: HashSet<CategoryId> = catalog.iter().map(|c| c.id).collect();
        let wanted: HashSet<CategoryId> = self
            .categories
            .iter()
            .copied()
            .filter(|id| known.contains(id))
            .collect();

        let category = if wanted.is_empty() && !self.include_uncategorized {
            None
        } else {
            Some(CategoryConstraint {
                known,
                wanted,
                include_uncategorized: self.include_uncategorized,
            })
        };

        ResolvedFilter {
            from: self.from,
            to: self.to,
            category,
            min_amount: self.min_amount,
            max_amount: self.max_amount,
            text: self.normalized_text(),
        }
    }
}

#[derive(Debug, Clone)]
struct CategoryConstraint {
    known: HashSet<CategoryId>,
    wanted: HashSet<CategoryId>,
    include_uncategorized: bool,
}

impl CategoryConstraint {
    fn matches(&self, category_id: Option<CategoryId>) -> bool {
        match category_id {
            None => self.include_uncategorized,
            Some(id) if self.known.contains(&id) => self.wanted.contains(&id),
            // Dangling reference: the constraint does not apply
            Some(_) => true,
        }
    }
}

/// Filter criteria resolved against a catalog snapshot, ready to evaluate
#[derive(Debug, Clone)]
pub struct ResolvedFilter {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    category: Option<CategoryConstraint>,
    min_amount: Option<Money>,
    max_amount: Option<Money>,
    text: Option<String>,
}

impl ResolvedFilter {
    /// Whether an expense satisfies every active constraint
    pub fn matches(&self, expense: &Expense) -> bool {
        if self.from.is_some_and(|from| expense.date < from) {
            return false;
        }
        if self.to.is_some_and(|to| expense.date > to) {
            return false;
        }
        if self.min_amount.is_some_and(|min| expense.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| expense.amount > max) {
            return false;
        }
        if let Some(category) = &self.category {
            if !category.matches(expense.category_id) {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if !expense.description.to_lowercase().contains(text.as_str()) {
                return false;
            }
        }
        true
    }

    /// Whether the category constraint survived resolution
    pub fn has_category_constraint(&self) -> bool {
        self.category.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(units: i64, category: Option<CategoryId>, day: u32, text: &str) -> Expense {
        Expense::with_details(date(2024, 1, day), Money::from_units(units), category, text)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterCriteria::new();
        assert!(filter.is_empty());

        let resolved = filter.resolve(&[]);
        assert!(resolved.matches(&expense(0, None, 1, "")));
        assert!(resolved.matches(&expense(10, Some(CategoryId::new()), 2, "x")));
    }

    #[test]
    fn test_whitespace_text_is_no_constraint() {
        let filter = FilterCriteria::new().text("   ");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let resolved = FilterCriteria::new()
            .date_range(date(2024, 1, 2), date(2024, 1, 3))
            .resolve(&[]);

        assert!(!resolved.matches(&expense(1, None, 1, "")));
        assert!(resolved.matches(&expense(1, None, 2, "")));
        assert!(resolved.matches(&expense(1, None, 3, "")));
        assert!(!resolved.matches(&expense(1, None, 4, "")));
    }

    #[test]
    fn test_amount_range_is_inclusive() {
        let resolved = FilterCriteria::new()
            .min_amount(Money::from_units(50))
            .max_amount(Money::from_units(100))
            .resolve(&[]);

        assert!(!resolved.matches(&expense(49, None, 1, "")));
        assert!(resolved.matches(&expense(50, None, 1, "")));
        assert!(resolved.matches(&expense(100, None, 1, "")));
        assert!(!resolved.matches(&expense(101, None, 1, "")));
    }

    #[test]
    fn test_inverted_date_range_matches_nothing() {
        let resolved = FilterCriteria::new()
            .from_date(date(2024, 1, 3))
            .to_date(date(2024, 1, 2))
            .resolve(&[]);

        for day in 1..=4 {
            assert!(!resolved.matches(&expense(1, None, day, "")));
        }
    }

    #[test]
    fn test_inverted_amount_range_matches_nothing() {
        let resolved = FilterCriteria::new()
            .min_amount(Money::from_units(100))
            .max_amount(Money::from_units(50))
            .resolve(&[]);

        for units in [0, 50, 75, 100, 150] {
            assert!(!resolved.matches(&expense(units, None, 1, "")));
        }
    }

    #[test]
    fn test_category_constraint() {
        let food = Category::new("Food");
        let rent = Category::new("Rent");
        let catalog = vec![food.clone(), rent.clone()];

        let resolved = FilterCriteria::new().category(food.id).resolve(&catalog);
        assert!(resolved.has_category_constraint());
        assert!(resolved.matches(&expense(1, Some(food.id), 1, "")));
        assert!(!resolved.matches(&expense(1, Some(rent.id), 1, "")));
        assert!(!resolved.matches(&expense(1, None, 1, "")));

        let with_inbox = FilterCriteria::new()
            .category(food.id)
            .uncategorized()
            .resolve(&catalog);
        assert!(with_inbox.matches(&expense(1, None, 1, "")));
        assert!(!with_inbox.matches(&expense(1, Some(rent.id), 1, "")));
    }

    #[test]
    fn test_dangling_expense_category_passes_category_constraint() {
        let food = Category::new("Food");
        let deleted = CategoryId::new();

        let resolved = FilterCriteria::new().category(food.id).resolve(&[food]);
        assert!(resolved.matches(&expense(1, Some(deleted), 1, "")));
    }

    #[test]
    fn test_constraint_on_unknown_ids_only_is_inactive() {
        let food = Category::new("Food");
        let resolved = FilterCriteria::new()
            .category(CategoryId::new())
            .resolve(&[food.clone()]);

        assert!(!resolved.has_category_constraint());
        assert!(resolved.matches(&expense(1, None, 1, "")));
        assert!(resolved.matches(&expense(1, Some(food.id), 1, "")));
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let resolved = FilterCriteria::new().text("COFFEE").resolve(&[]);
        assert!(resolved.matches(&expense(1, None, 1, "Morning coffee")));
        assert!(!resolved.matches(&expense(1, None, 1, "Tea")));
    }

    #[test]
    fn test_category_builder_deduplicates() {
        let id = CategoryId::new();
        let filter = FilterCriteria::new().category(id).category(id);
        assert_eq!(filter.categories, vec![id]);
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let json = serde_json::to_string(&FilterCriteria::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
