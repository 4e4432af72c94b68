//! Sort keys, directions and the stable expense comparator

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::models::{Category, CategoryId, Expense};

/// Field an expense list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Description,
    /// Category display name, resolved through the catalog
    Category,
}

/// Direction of an expense list ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

/// A sort key or direction name that is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownSortValue {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl SortKey {
    pub fn all() -> &'static [Self] {
        &[Self::Date, Self::Amount, Self::Description, Self::Category]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Description => "description",
            Self::Category => "category",
        }
    }

    /// Parse a key, falling back to [`SortKey::Date`] for unknown names
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|err| {
            tracing::warn!("{err}; falling back to '{}'", Self::default().name());
            Self::default()
        })
    }
}

impl OrderDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Apply this direction to an ascending comparison
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Parse a direction, falling back to [`OrderDirection::Asc`] for unknown names
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|err| {
            tracing::warn!("{err}; falling back to '{}'", Self::default().name());
            Self::default()
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "description" | "desc" => Ok(Self::Description),
            "category" => Ok(Self::Category),
            _ => Err(UnknownSortValue {
                kind: "sort key",
                value: s.to_string(),
                expected: "date, amount, description, category",
            }),
        }
    }
}

impl FromStr for OrderDirection {
    type Err = UnknownSortValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(UnknownSortValue {
                kind: "order",
                value: s.to_string(),
                expected: "asc, desc",
            }),
        }
    }
}

// Persisted view state may carry values written by another version; unknown
// names load as the default instead of failing the whole settings file.
impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&raw))
    }
}

impl<'de> Deserialize<'de> for OrderDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&raw))
    }
}

/// Stable in-place sort of `expenses` by `sort_by` in direction `order_by`
///
/// The direction flips the comparison, not the sequence, so expenses with
/// equal keys keep their input order either way.
pub fn sort_expenses(
    expenses: &mut [Expense],
    sort_by: SortKey,
    order_by: OrderDirection,
    categories: &[Category],
) {
    let names: HashMap<CategoryId, String> = match sort_by {
        SortKey::Category => categories
            .iter()
            .map(|c| (c.id, c.name.to_lowercase()))
            .collect(),
        _ => HashMap::new(),
    };

    expenses.sort_by(|a, b| order_by.apply(compare(a, b, sort_by, &names)));
}

fn compare(
    a: &Expense,
    b: &Expense,
    sort_by: SortKey,
    names: &HashMap<CategoryId, String>,
) -> Ordering {
    match sort_by {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Amount => a.amount.cmp(&b.amount),
        SortKey::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase()),
        SortKey::Category => category_name(a, names).cmp(category_name(b, names)),
    }
}

fn category_name<'a>(expense: &Expense, names: &'a HashMap<CategoryId, String>) -> &'a str {
    expense
        .category_id
        .and_then(|id| names.get(&id))
        .map(String::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(units: i64, day: u32, text: &str) -> Expense {
        Expense::with_details(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            Money::from_units(units),
            None,
            text,
        )
    }

    fn descriptions(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Amount".parse::<SortKey>().unwrap(), SortKey::Amount);
        assert_eq!(" date ".parse::<SortKey>().unwrap(), SortKey::Date);
        assert_eq!("DESC".parse::<OrderDirection>().unwrap(), OrderDirection::Desc);
        assert!("payee".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_unknown_values_fall_back() {
        assert_eq!(SortKey::parse_or_default("payee"), SortKey::Date);
        assert_eq!(OrderDirection::parse_or_default("up"), OrderDirection::Asc);

        let key: SortKey = serde_json::from_str("\"nonsense\"").unwrap();
        assert_eq!(key, SortKey::Date);
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&SortKey::Description).unwrap(), "\"description\"");
        assert_eq!(serde_json::to_string(&OrderDirection::Desc).unwrap(), "\"desc\"");
    }

    #[test]
    fn test_stable_in_both_directions() {
        let mut asc = vec![expense(5, 1, "a"), expense(5, 2, "b"), expense(1, 3, "c")];
        let mut desc = asc.clone();

        sort_expenses(&mut asc, SortKey::Amount, OrderDirection::Asc, &[]);
        assert_eq!(descriptions(&asc), vec!["c", "a", "b"]);

        sort_expenses(&mut desc, SortKey::Amount, OrderDirection::Desc, &[]);
        assert_eq!(descriptions(&desc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_description_ignores_case() {
        let mut list = vec![expense(1, 1, "banana"), expense(1, 1, "Apple"), expense(1, 1, "cherry")];
        sort_expenses(&mut list, SortKey::Description, OrderDirection::Asc, &[]);
        assert_eq!(descriptions(&list), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_category_sort_uses_catalog_names() {
        let rent = Category::new("Rent");
        let food = Category::new("Food");
        let mut a = expense(1, 1, "rent");
        a.category_id = Some(rent.id);
        let mut b = expense(1, 1, "food");
        b.category_id = Some(food.id);
        let mut c = expense(1, 1, "dangling");
        c.category_id = Some(CategoryId::new());
        let d = expense(1, 1, "inbox");

        let mut list = vec![a, b, c, d];
        sort_expenses(&mut list, SortKey::Category, OrderDirection::Asc, &[rent, food]);
        assert_eq!(descriptions(&list), vec!["dangling", "inbox", "food", "rent"]);
    }
}
