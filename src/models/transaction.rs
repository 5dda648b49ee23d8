//! Transaction model
//!
//! A ledger entry with a signed amount: negative amounts are expenses,
//! positive amounts are income. Transactions are read-only inside the engine.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryKey;
use super::ids::TransactionId;
use super::money::Money;

/// Which side of the ledger an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Expense,
    Income,
}

impl EntryKind {
    /// Apply this kind's sign convention to an amount of either sign
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Expense => -amount.abs(),
            Self::Income => amount.abs(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "expenses" | "out" => Some(Self::Expense),
            "income" | "in" => Some(Self::Income),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// A normalized financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Upstream identifier
    pub id: TransactionId,

    /// Signed amount (negative for expense, positive for income)
    pub amount: Money,

    /// Category as delivered; compare through `category_key`
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Date the transaction happened, if recorded
    pub occurred_on: Option<NaiveDate>,

    /// When the record was created upstream
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction with the given signed amount
    pub fn new(
        id: TransactionId,
        amount: Money,
        category: impl Into<String>,
        occurred_on: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            description: String::new(),
            occurred_on,
            created_at,
        }
    }

    /// Set the description (builder style)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Normalized category key
    pub fn category_key(&self) -> CategoryKey {
        CategoryKey::new(&self.category)
    }

    /// Timestamp used for ordering: `occurred_on` at midnight UTC, or
    /// `created_at` when no date was recorded
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        match self.occurred_on {
            Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
            None => self.created_at,
        }
    }

    /// Calendar day used for filtering and period restriction
    pub fn effective_date(&self) -> NaiveDate {
        self.occurred_on
            .unwrap_or_else(|| self.created_at.date_naive())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.effective_date().format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}
