//! Ledger display formatting

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use super::report::{format_money, separator, truncate};
use crate::models::Transaction;

/// Presentation preferences taken from user settings
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

/// Format a date, falling back to ISO format if the pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let valid = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let pattern = if valid { pattern } else { "%Y-%m-%d" };
    date.format(pattern).to_string()
}

/// Format a single ledger row
pub fn format_transaction_row(txn: &Transaction, options: &DisplayOptions) -> String {
    // Undated entries show their created_at day, marked with '~'
    let date_marker = if txn.occurred_on.is_some() { ' ' } else { '~' };

    let category = if txn.category.trim().is_empty() {
        "(uncategorized)"
    } else {
        txn.category.trim()
    };

    format!(
        "{}{:11} {:18} {:28} {:>12}",
        date_marker,
        format_date(txn.effective_date(), &options.date_format),
        truncate(category, 18),
        truncate(&txn.description, 28),
        format_money(txn.amount, &options.currency_symbol)
    )
}

/// Format a ledger as a register with a net total line
pub fn format_ledger(ledger: &[Transaction], options: &DisplayOptions) -> String {
    if ledger.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        " {:11} {:18} {:28} {:>12}\n",
        "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&separator(73));
    output.push('\n');

    for txn in ledger {
        output.push_str(&format_transaction_row(txn, options));
        output.push('\n');
    }

    let net: crate::models::Money = ledger.iter().map(|t| t.amount).sum();
    output.push_str(&separator(73));
    output.push('\n');
    output.push_str(&format!(
        " {:<59} {:>12}\n",
        format!("{} transaction(s), net", ledger.len()),
        format_money(net, &options.currency_symbol)
    ));

    output
}
