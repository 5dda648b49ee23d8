//! Add CLI command
//!
//! Records an expense or an income entry into the stored collections.

use clap::Args;

use super::{display_options, parse_amount, parse_date, parse_kind};
use crate::config::settings::Settings;
use crate::display::format_transaction_row;
use crate::error::TrackerResult;
use crate::services::RecordService;
use crate::storage::Storage;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// expense or income
    pub kind: String,

    /// Amount; the sign is taken from the kind
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category name
    pub category: String,

    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Date the entry occurred (YYYY-MM-DD); omitted entries are dated by creation time
    #[arg(long)]
    pub date: Option<String>,
}

/// Handle the add command
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> TrackerResult<()> {
    let kind = parse_kind(&args.kind)?;
    let amount = parse_amount(&args.amount)?;
    let occurred_on = args.date.as_deref().map(parse_date).transpose()?;

    let txn = RecordService::new(storage).record(
        kind,
        amount,
        &args.category,
        &args.description,
        occurred_on,
    )?;

    println!("Recorded {}:", kind);
    println!("{}", format_transaction_row(&txn, &display_options(settings)));
    Ok(())
}
