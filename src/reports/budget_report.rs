//! Budget vs. actual report
//!
//! Loads a period's ledger through a `LedgerSource`, reconciles it for a view
//! mode and applies a sort selection. A failed fetch still produces a report
//! (with no transactions) and carries the notice for the caller to show.

use crate::display::report::{double_separator, format_header, format_money, separator, truncate};
use crate::models::{Money, Period, ViewMode};
use crate::services::{load_ledger, LedgerSource};

use super::comparison::{reconcile, AggregationRow, Reconciliation};
use super::sort::{sort_rows, SortState};

const WIDTH: usize = 80;

/// Budget vs. actual report for one period
#[derive(Debug, Clone)]
pub struct BudgetReport {
    pub period: Period,
    pub sort: SortState,
    pub reconciliation: Reconciliation,
    pub transaction_count: usize,
    pub notice: Option<String>,
}

impl BudgetReport {
    /// Generate a report for a period
    pub fn generate<S: LedgerSource + ?Sized>(
        source: &S,
        period: &Period,
        mode: ViewMode,
        sort: SortState,
    ) -> Self {
        let view = load_ledger(source, period);
        let reconciliation = reconcile(&view.ledger, &view.budgets, mode);
        let sorted = sort_rows(&reconciliation.rows, &sort);

        Self {
            period: *period,
            sort,
            reconciliation: reconciliation.with_rows(sorted),
            transaction_count: view.ledger.len(),
            notice: view.notice,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.reconciliation.mode
    }

    pub fn rows(&self) -> &[AggregationRow] {
        &self.reconciliation.rows
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let money = |m: Money| format_money(m, symbol);
        let all = self.mode() == ViewMode::All;

        output.push_str(&format_header(
            &format!("Budget vs. Actual ({}) - {}", self.mode(), self.period),
            WIDTH,
        ));
        output.push('\n');
        output.push_str(&double_separator(WIDTH));
        output.push('\n');

        if self.rows().is_empty() {
            output.push_str("No budgets or transactions for this period.\n");
            return output;
        }

        if all {
            output.push_str(&format!(
                "{:<22} {:>11} {:>11} {:>11} {:>11} {:>11}\n",
                "Category", "Budget", "Expense", "Income", "Actual", "Difference"
            ));
        } else {
            output.push_str(&format!(
                "{:<34} {:>14} {:>14} {:>14}\n",
                "Category", "Budget", "Actual", "Difference"
            ));
        }
        output.push_str(&separator(WIDTH));
        output.push('\n');

        for row in self.rows() {
            let name = if row.category.is_empty() {
                "(uncategorized)".to_string()
            } else {
                row.category.to_string()
            };

            if all {
                output.push_str(&format!(
                    "{:<22} {:>11} {:>11} {:>11} {:>11} {:>11}\n",
                    truncate(&name, 22),
                    money(row.budget),
                    money(row.actual_expense.unwrap_or_default()),
                    money(row.actual_income.unwrap_or_default()),
                    money(row.actual),
                    money(row.difference)
                ));
            } else {
                output.push_str(&format!(
                    "{:<34} {:>14} {:>14} {:>14}\n",
                    truncate(&name, 34),
                    money(row.budget),
                    money(row.actual),
                    money(row.difference)
                ));
            }
        }

        let totals = &self.reconciliation.totals;
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if all {
            output.push_str(&format!(
                "{:<22} {:>11} {:>11} {:>11} {:>11} {:>11}\n",
                "TOTAL",
                money(totals.total_budget),
                "",
                "",
                money(totals.total_actual),
                money(totals.total_difference)
            ));
        } else {
            output.push_str(&format!(
                "{:<34} {:>14} {:>14} {:>14}\n",
                "TOTAL",
                money(totals.total_budget),
                money(totals.total_actual),
                money(totals.total_difference)
            ));
        }

        output.push_str(&format!(
            "\n{} transaction(s), sorted: {}\n",
            self.transaction_count, self.sort
        ));

        output
    }
}
