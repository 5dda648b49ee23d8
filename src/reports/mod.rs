//! Reports module for fintrack
//!
//! Category reconciliation, the sort controller over its rows, and the
//! budget vs. actual report built from them.

pub mod budget_report;
pub mod comparison;
pub mod sort;

pub use budget_report::BudgetReport;
pub use comparison::{reconcile, AggregationRow, Reconciliation, Totals};
pub use sort::{apply_sort, sort_rows, SortDirection, SortKey, SortState};
