//! Periodic transaction templates
//!
//! A template records the intent of a recurring expense or income. It is
//! data only: nothing in this crate expands a template into transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TemplateId;
use super::money::Money;
use super::transaction::EntryKind;

/// How often a template is meant to recur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Weekly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "weekly" | "week" => Ok(Self::Weekly),
            other => Err(format!(
                "unknown frequency '{}' (expected monthly or weekly)",
                other
            )),
        }
    }
}

/// A recurring-transaction definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicTemplate {
    pub id: TemplateId,

    pub kind: EntryKind,

    /// Unsigned amount; the kind decides the sign once materialized
    pub amount: Money,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub frequency: Frequency,

    pub created_at: DateTime<Utc>,
}

impl PeriodicTemplate {
    pub fn new(
        kind: EntryKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: TemplateId::new(),
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            frequency,
            created_at: Utc::now(),
        }
    }

    /// Validate the template
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.amount.is_negative() {
            return Err(TemplateValidationError::NegativeAmount);
        }
        if self.category.trim().is_empty() {
            return Err(TemplateValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for PeriodicTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.frequency, self.kind, self.category, self.amount, self.description
        )
    }
}

/// Validation errors for templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValidationError {
    NegativeAmount,
    MissingCategory,
}

impl fmt::Display for TemplateValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Template amount cannot be negative"),
            Self::MissingCategory => write!(f, "Template category cannot be empty"),
        }
    }
}

impl std::error::Error for TemplateValidationError {}
