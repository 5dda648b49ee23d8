//! Ledger filter pipeline
//!
//! Applies the type, category, description and date predicates of a
//! `FilterState` in that order. Absent filters pass everything; predicates
//! combine with AND. The input ledger is never modified and the output keeps
//! the ledger's order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::models::Transaction;

/// Which side of the ledger to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Expenses,
    Income,
}

impl TypeFilter {
    fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Expenses => txn.is_expense(),
            Self::Income => txn.is_income(),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Expenses => write!(f, "expenses"),
            Self::Income => write!(f, "income"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "expenses" | "expense" => Ok(Self::Expenses),
            "income" => Ok(Self::Income),
            other => Err(format!(
                "unknown type filter '{}' (expected all, expenses or income)",
                other
            )),
        }
    }
}

/// Transaction list filter state, owned by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub type_filter: TypeFilter,

    /// Case-insensitive substring of the category; empty matches all
    #[serde(default)]
    pub category_substring: String,

    /// Case-insensitive substring of the description; empty matches all
    #[serde(default)]
    pub description_substring: String,

    /// Inclusive lower bound on the effective date
    #[serde(default)]
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper bound on the effective date
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_filter(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn category(mut self, substring: impl Into<String>) -> Self {
        self.category_substring = substring.into();
        self
    }

    pub fn description(mut self, substring: impl Into<String>) -> Self {
        self.description_substring = substring.into();
        self
    }

    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check a single transaction against every active predicate
    pub fn matches(&self, txn: &Transaction) -> bool {
        if !self.type_filter.matches(txn) {
            return false;
        }

        if !contains_ignore_case(&txn.category, &self.category_substring) {
            return false;
        }

        if !contains_ignore_case(&txn.description, &self.description_substring) {
            return false;
        }

        let date = txn.effective_date();
        if let Some(from) = self.date_from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if date > to {
                return false;
            }
        }

        true
    }
}

/// An empty needle matches everything; an empty haystack matches nothing else
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Apply a filter state to a ledger, returning a new ledger
pub fn filter_ledger(ledger: &[Transaction], state: &FilterState) -> Vec<Transaction> {
    let filtered: Vec<Transaction> = ledger.iter().filter(|t| state.matches(t)).cloned().collect();
    debug!(input = ledger.len(), output = filtered.len(), "filtered ledger");
    filtered
}
