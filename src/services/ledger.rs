//! Ledger merger and loader
//!
//! Merges the normalized expense and income collections into one ledger,
//! most recent first, and restricts a ledger to a reporting period.
//! `load_ledger` wraps the data-access collaborator so a failed fetch turns
//! into an empty ledger plus a notice instead of an error.

use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::{BudgetSettings, Period, PeriodicTemplate, RawRecord, Transaction};

use super::normalize::{normalize_expenses, normalize_income};

/// Data-access collaborator that delivers already-fetched collections
pub trait LedgerSource {
    /// Raw expense records for a period
    fn list_expenses(&self, period: &Period) -> TrackerResult<Vec<RawRecord>>;

    /// Raw income records for a period
    fn list_income(&self, period: &Period) -> TrackerResult<Vec<RawRecord>>;

    /// Configured budget targets
    fn budget_settings(&self) -> TrackerResult<BudgetSettings>;

    /// Stored periodic templates
    fn list_templates(&self) -> TrackerResult<Vec<PeriodicTemplate>>;
}

/// Normalize and merge raw expense and income records into one ledger
pub fn merge_ledger(expenses: &[RawRecord], income: &[RawRecord]) -> Vec<Transaction> {
    merge_normalized(normalize_expenses(expenses), normalize_income(income))
}

/// Merge already-normalized collections.
///
/// Orders by effective timestamp descending. The sort is stable, so entries
/// with equal timestamps keep concatenation order: expenses first, then
/// income, each in source order.
pub fn merge_normalized(expenses: Vec<Transaction>, income: Vec<Transaction>) -> Vec<Transaction> {
    let (expense_count, income_count) = (expenses.len(), income.len());

    let mut ledger = expenses;
    ledger.extend(income);
    ledger.sort_by(|a, b| b.effective_timestamp().cmp(&a.effective_timestamp()));

    debug!(expense_count, income_count, "merged ledger");
    ledger
}

/// Keep only transactions whose effective date falls in `period`
pub fn restrict_to_period(ledger: &[Transaction], period: &Period) -> Vec<Transaction> {
    ledger
        .iter()
        .filter(|t| period.contains(t.effective_date()))
        .cloned()
        .collect()
}

/// A ledger ready for presentation
#[derive(Debug, Clone, Default)]
pub struct LedgerView {
    pub ledger: Vec<Transaction>,
    pub budgets: BudgetSettings,
    /// Non-fatal message for the user when a fetch failed
    pub notice: Option<String>,
}

/// Fetch, normalize and merge the ledger for a period.
///
/// Fetch failures never propagate. If either transaction collection fails the
/// ledger is empty; a budget failure only empties the budgets. Each failure
/// adds to the notice for the presentation layer.
pub fn load_ledger<S: LedgerSource + ?Sized>(source: &S, period: &Period) -> LedgerView {
    let mut notices = Vec::new();

    let expenses = source.list_expenses(period).map_err(|e| {
        warn!(error = %e, %period, "failed to load expenses");
        notices.push(format!("Expenses could not be loaded: {}", e));
    });

    let income = source.list_income(period).map_err(|e| {
        warn!(error = %e, %period, "failed to load income");
        notices.push(format!("Income could not be loaded: {}", e));
    });

    let budgets = source.budget_settings().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load budget settings");
        notices.push(format!("Budgets could not be loaded: {}", e));
        BudgetSettings::default()
    });

    let ledger = match (expenses, income) {
        (Ok(expenses), Ok(income)) => {
            restrict_to_period(&merge_ledger(&expenses, &income), period)
        }
        // A partial ledger would misreport totals; show nothing instead
        _ => Vec::new(),
    };

    LedgerView {
        ledger,
        budgets,
        notice: (!notices.is_empty()).then(|| notices.join("; ")),
    }
}
