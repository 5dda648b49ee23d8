//! Budget targets per category
//!
//! A `CategoryBudget` is a monthly target for one (category, kind) pair.
//! `BudgetSettings` groups the expense and income targets the way the
//! settings store delivers them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::CategoryKey;
use super::money::Money;
use super::transaction::EntryKind;

/// Monthly target for one category on one side of the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub category: CategoryKey,

    /// Target amount in currency units on disk, never negative
    #[serde(default, with = "crate::models::money::decimal_units", alias = "monthlyAmount")]
    pub monthly_amount: Money,

    #[serde(default)]
    pub kind: EntryKind,
}

impl CategoryBudget {
    /// Create a budget entry. Negative amounts are stored as their absolute value.
    pub fn new(category: impl Into<CategoryKey>, monthly_amount: Money, kind: EntryKind) -> Self {
        Self {
            category: category.into(),
            monthly_amount: monthly_amount.abs(),
            kind,
        }
    }

    pub fn expense(category: impl Into<CategoryKey>, monthly_amount: Money) -> Self {
        Self::new(category, monthly_amount, EntryKind::Expense)
    }

    pub fn income(category: impl Into<CategoryKey>, monthly_amount: Money) -> Self {
        Self::new(category, monthly_amount, EntryKind::Income)
    }
}

/// All configured budget targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSettings {
    #[serde(default)]
    pub expenses: Vec<CategoryBudget>,

    #[serde(default)]
    pub income: Vec<CategoryBudget>,
}

impl BudgetSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build settings from a flat list, routing each entry by its kind
    pub fn from_entries(entries: impl IntoIterator<Item = CategoryBudget>) -> Self {
        let mut settings = Self::default();
        for entry in entries {
            settings.set(entry);
        }
        settings
    }

    /// Entries for one kind, in configuration order
    pub fn for_kind(&self, kind: EntryKind) -> &[CategoryBudget] {
        match kind {
            EntryKind::Expense => &self.expenses,
            EntryKind::Income => &self.income,
        }
    }

    /// Insert or replace the target for (category, kind)
    pub fn set(&mut self, entry: CategoryBudget) {
        let list = match entry.kind {
            EntryKind::Expense => &mut self.expenses,
            EntryKind::Income => &mut self.income,
        };
        match list.iter_mut().find(|b| b.category == entry.category) {
            Some(existing) => existing.monthly_amount = entry.monthly_amount,
            None => list.push(entry),
        }
    }

    /// Remove the target for (category, kind); returns the removed entry
    pub fn remove(&mut self, category: &CategoryKey, kind: EntryKind) -> Option<CategoryBudget> {
        let list = match kind {
            EntryKind::Expense => &mut self.expenses,
            EntryKind::Income => &mut self.income,
        };
        let position = list.iter().position(|b| &b.category == category)?;
        Some(list.remove(position))
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.income.is_empty()
    }
}

/// Which transactions and which budget kinds take part in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Expenses,
    Income,
    All,
}

impl ViewMode {
    /// Budget kinds that contribute to this view, in row-discovery order
    pub fn budget_kinds(&self) -> &'static [EntryKind] {
        match self {
            Self::Expenses => &[EntryKind::Expense],
            Self::Income => &[EntryKind::Income],
            Self::All => &[EntryKind::Expense, EntryKind::Income],
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expenses => write!(f, "expenses"),
            Self::Income => write!(f, "income"),
            Self::All => write!(f, "all"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expenses" | "expense" => Ok(Self::Expenses),
            "income" => Ok(Self::Income),
            "all" | "both" => Ok(Self::All),
            other => Err(format!(
                "unknown view mode '{}' (expected expenses, income or all)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_budget_is_stored_positive() {
        let budget = CategoryBudget::expense("Food", Money::from_cents(-20000));
        assert_eq!(budget.monthly_amount.cents(), 20000);
    }

    #[test]
    fn test_set_replaces_trimmed_duplicate() {
        let mut settings = BudgetSettings::new();
        settings.set(CategoryBudget::expense("Food", Money::from_units(200)));
        settings.set(CategoryBudget::expense(" Food ", Money::from_units(250)));
        settings.set(CategoryBudget::income("Food", Money::from_units(10)));

        assert_eq!(settings.expenses.len(), 1);
        assert_eq!(settings.expenses[0].monthly_amount, Money::from_units(250));
        assert_eq!(settings.income.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut settings = BudgetSettings::from_entries(vec![
            CategoryBudget::expense("Food", Money::from_units(200)),
            CategoryBudget::expense("Rent", Money::from_units(900)),
        ]);

        let removed = settings.remove(&CategoryKey::new("Food"), EntryKind::Expense);
        assert!(removed.is_some());
        assert!(settings.remove(&CategoryKey::new("Food"), EntryKind::Expense).is_none());
        assert_eq!(settings.expenses.len(), 1);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"expenses":[{"category":" Rent ","monthly_amount":900},{"category":"Gym"}]}"#;
        let settings: BudgetSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.expenses[0].category.as_str(), "Rent");
        assert_eq!(settings.expenses[0].monthly_amount, Money::from_units(900));
        assert!(settings.expenses[1].monthly_amount.is_zero());
        assert_eq!(settings.expenses[0].kind, EntryKind::Expense);
        assert!(settings.income.is_empty());
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("ALL".parse::<ViewMode>().unwrap(), ViewMode::All);
        assert_eq!("expense".parse::<ViewMode>().unwrap(), ViewMode::Expenses);
        assert!("weekly".parse::<ViewMode>().is_err());
    }
}
