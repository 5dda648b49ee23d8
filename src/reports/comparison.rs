//! Budget vs. actual comparison
//!
//! Joins configured category budgets with the actual sums of a
//! period-restricted ledger. Every category that appears in either input gets
//! exactly one row; category keys are trimmed before they are compared.
//!
//! Row order is discovery order: expense budgets, then income budgets (each as
//! the view mode admits them, in configuration order), then categories seen
//! only in the ledger, in ledger order.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetSettings, CategoryKey, CategoryMap, Money, Transaction, ViewMode};

/// One category's budget and actual figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationRow {
    pub category: CategoryKey,
    pub budget: Money,
    pub actual: Money,
    /// Only present in the `all` view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_expense: Option<Money>,
    /// Only present in the `all` view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_income: Option<Money>,
    /// `actual - budget`
    pub difference: Money,
}

impl AggregationRow {
    /// Spending rows are over budget when the difference is positive
    pub fn is_over_budget(&self) -> bool {
        self.difference.is_positive()
    }
}

/// Column sums over all rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_budget: Money,
    pub total_actual: Money,
    pub total_difference: Money,
}

impl Totals {
    pub fn from_rows(rows: &[AggregationRow]) -> Self {
        Self {
            total_budget: rows.iter().map(|r| r.budget).sum(),
            total_actual: rows.iter().map(|r| r.actual).sum(),
            total_difference: rows.iter().map(|r| r.difference).sum(),
        }
    }
}

/// Output of `reconcile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub mode: ViewMode,
    pub rows: Vec<AggregationRow>,
    pub totals: Totals,
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    budget: Money,
    expense: Money,
    income: Money,
}

fn admits(mode: ViewMode, txn: &Transaction) -> bool {
    match mode {
        ViewMode::Expenses => txn.is_expense(),
        ViewMode::Income => txn.is_income(),
        ViewMode::All => true,
    }
}

/// Reconcile a ledger against budget settings for one view mode.
///
/// The ledger is expected to be restricted to the reporting period already.
/// In the `all` view a category's budget is the sum of its expense and income
/// targets.
pub fn reconcile(ledger: &[Transaction], budgets: &BudgetSettings, mode: ViewMode) -> Reconciliation {
    let mut by_category: CategoryMap<Accumulator> = CategoryMap::new();

    for &kind in mode.budget_kinds() {
        for entry in budgets.for_kind(kind) {
            let acc = by_category.entry_or_insert_with(entry.category.clone(), Accumulator::default);
            acc.budget += entry.monthly_amount.abs();
        }
    }

    for txn in ledger.iter().filter(|t| admits(mode, t)) {
        let acc = by_category.entry_or_insert_with(txn.category_key(), Accumulator::default);
        if txn.is_expense() {
            acc.expense += txn.amount.abs();
        } else {
            acc.income += txn.amount;
        }
    }

    let rows: Vec<AggregationRow> = by_category
        .into_iter()
        .map(|(category, acc)| {
            let (actual, actual_expense, actual_income) = match mode {
                ViewMode::Expenses => (acc.expense, None, None),
                ViewMode::Income => (acc.income, None, None),
                ViewMode::All => (acc.expense + acc.income, Some(acc.expense), Some(acc.income)),
            };
            AggregationRow {
                category,
                budget: acc.budget,
                actual,
                actual_expense,
                actual_income,
                difference: actual - acc.budget,
            }
        })
        .collect();

    let totals = Totals::from_rows(&rows);
    tracing::debug!(%mode, rows = rows.len(), "reconciled ledger");

    Reconciliation { mode, rows, totals }
}

impl Reconciliation {
    /// Replace the rows (e.g. after sorting); totals are order-independent
    pub fn with_rows(mut self, rows: Vec<AggregationRow>) -> Self {
        self.rows = rows;
        self
    }
}
