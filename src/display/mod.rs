//! Display formatting for terminal output

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_list, format_template_list};
pub use report::{format_money, format_money_colored, truncate};
pub use transaction::{format_date, format_ledger, format_transaction_row, DisplayOptions};
