//! Sort controller for comparison rows
//!
//! `SortState` starts with no key, which leaves rows in reconciliation order.
//! `apply_sort` is the only transition: the same key flips the direction, a
//! new key resets it to ascending.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::comparison::AggregationRow;
use crate::models::Money;

/// Column a comparison table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Category,
    Budget,
    Actual,
    ActualExpense,
    ActualIncome,
    Difference,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        Self::Category,
        Self::Budget,
        Self::Actual,
        Self::ActualExpense,
        Self::ActualIncome,
        Self::Difference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Budget => "budget",
            Self::Actual => "actual",
            Self::ActualExpense => "actual_expense",
            Self::ActualIncome => "actual_income",
            Self::Difference => "difference",
        }
    }

    fn amount(&self, row: &AggregationRow) -> Money {
        match self {
            Self::Category => Money::zero(),
            Self::Budget => row.budget,
            Self::Actual => row.actual,
            Self::ActualExpense => row.actual_expense.unwrap_or_default(),
            Self::ActualIncome => row.actual_income.unwrap_or_default(),
            Self::Difference => row.difference,
        }
    }

    fn compare(&self, a: &AggregationRow, b: &AggregationRow) -> Ordering {
        match self {
            Self::Category => a.category.cmp(&b.category),
            _ => self.amount(a).cmp(&self.amount(b)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "category" => Ok(Self::Category),
            "budget" => Ok(Self::Budget),
            "actual" => Ok(Self::Actual),
            "actual_expense" | "actualexpense" => Ok(Self::ActualExpense),
            "actual_income" | "actualincome" => Ok(Self::ActualIncome),
            "difference" | "diff" => Ok(Self::Difference),
            other => Err(format!(
                "unknown sort key '{}' (expected one of: {})",
                other,
                Self::ALL.map(|k| k.as_str()).join(", ")
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Current sort selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "{} {}", key, self.direction),
            None => write!(f, "unsorted"),
        }
    }
}

/// Select a sort key, returning the next state
pub fn apply_sort(state: SortState, key: SortKey) -> SortState {
    if state.key == Some(key) {
        SortState {
            key: Some(key),
            direction: state.direction.flipped(),
        }
    } else {
        SortState {
            key: Some(key),
            direction: SortDirection::Asc,
        }
    }
}

/// Sort rows by the selected key.
///
/// Equal values fall back to category name ascending, whatever the direction.
pub fn sort_rows(rows: &[AggregationRow], state: &SortState) -> Vec<AggregationRow> {
    let mut sorted = rows.to_vec();
    let Some(key) = state.key else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let primary = match state.direction {
            SortDirection::Asc => key.compare(a, b),
            SortDirection::Desc => key.compare(b, a),
        };
        primary.then_with(|| a.category.cmp(&b.category))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKey;

    fn row(category: &str, budget: i64, actual: i64) -> AggregationRow {
        AggregationRow {
            category: CategoryKey::new(category),
            budget: Money::from_units(budget),
            actual: Money::from_units(actual),
            actual_expense: None,
            actual_income: None,
            difference: Money::from_units(actual - budget),
        }
    }

    fn categories(rows: &[AggregationRow]) -> Vec<&str> {
        rows.iter().map(|r| r.category.as_str()).collect()
    }

    fn sample() -> Vec<AggregationRow> {
        vec![
            row("Rent", 900, 900),
            row("Food", 200, 80),
            row("Travel", 0, 300),
            row("Books", 50, 80),
        ]
    }

    #[test]
    fn test_default_state_keeps_order() {
        let rows = sample();
        assert_eq!(sort_rows(&rows, &SortState::default()), rows);
    }

    #[test]
    fn test_apply_sort_transitions() {
        let state = apply_sort(SortState::new(), SortKey::Budget);
        assert_eq!(state.key, Some(SortKey::Budget));
        assert_eq!(state.direction, SortDirection::Asc);

        let state = apply_sort(state, SortKey::Budget);
        assert_eq!(state.direction, SortDirection::Desc);

        let state = apply_sort(state, SortKey::Actual);
        assert_eq!(state.key, Some(SortKey::Actual));
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn test_apply_sort_twice_restores_direction() {
        for key in SortKey::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let start = SortState {
                    key: Some(key),
                    direction,
                };
                assert_eq!(apply_sort(apply_sort(start, key), key), start);
            }
        }
    }

    #[test]
    fn test_sort_by_category() {
        let rows = sample();
        let state = apply_sort(SortState::new(), SortKey::Category);
        assert_eq!(categories(&sort_rows(&rows, &state)), vec!["Books", "Food", "Rent", "Travel"]);

        let state = apply_sort(state, SortKey::Category);
        assert_eq!(categories(&sort_rows(&rows, &state)), vec!["Travel", "Rent", "Food", "Books"]);
    }

    #[test]
    fn test_sort_by_difference_desc() {
        let rows = sample();
        let state = SortState {
            key: Some(SortKey::Difference),
            direction: SortDirection::Desc,
        };
        assert_eq!(categories(&sort_rows(&rows, &state)), vec!["Travel", "Books", "Rent", "Food"]);
    }

    #[test]
    fn test_ties_break_on_category_ascending() {
        let rows = vec![row("Zoo", 10, 0), row("Apples", 10, 0), row("Mid", 10, 0)];

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let state = SortState {
                key: Some(SortKey::Budget),
                direction,
            };
            assert_eq!(categories(&sort_rows(&rows, &state)), vec!["Apples", "Mid", "Zoo"]);
        }
    }

    #[test]
    fn test_missing_optional_amounts_compare_as_zero() {
        let mut with_income = row("Salary", 0, 100);
        with_income.actual_income = Some(Money::from_units(100));
        let mut refund = row("Refund", 0, -5);
        refund.actual_income = Some(Money::from_units(-5));
        let rows = vec![with_income, row("Food", 0, 10), refund];

        let state = apply_sort(SortState::new(), SortKey::ActualIncome);
        assert_eq!(categories(&sort_rows(&rows, &state)), vec!["Refund", "Food", "Salary"]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("actual-expense".parse::<SortKey>().unwrap(), SortKey::ActualExpense);
        assert_eq!(" Difference ".parse::<SortKey>().unwrap(), SortKey::Difference);
        let err = "payee".parse::<SortKey>().unwrap_err();
        assert!(err.contains("actual_income"));
    }
}
