//! Core data models for fintrack
//!
//! Transactions, budget targets, periods and recurring templates, plus the
//! raw record shape delivered by upstream collections.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod raw;
pub mod template;
pub mod transaction;

pub use budget::{BudgetSettings, CategoryBudget, ViewMode};
pub use category::{CategoryKey, CategoryMap};
pub use ids::{TemplateId, TransactionId};
pub use money::Money;
pub use period::{Period, PeriodKind};
pub use raw::RawRecord;
pub use template::{Frequency, PeriodicTemplate};
pub use transaction::{EntryKind, Transaction};
