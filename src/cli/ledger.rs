//! Ledger CLI command
//!
//! Shows the merged ledger for a period, narrowed by the filter pipeline.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use super::{create_output, display_options, parse_date, parse_period, print_notice};
use crate::config::settings::Settings;
use crate::display::format_ledger;
use crate::error::{TrackerError, TrackerResult};
use crate::export::export_ledger_csv;
use crate::services::{filter_ledger, load_ledger, FilterState, TypeFilter};
use crate::storage::Storage;

#[derive(Args, Debug, Default)]
pub struct LedgerArgs {
    /// Period to show (e.g. "2025-03", "2025", "current", "this-year")
    #[arg(short, long)]
    pub period: Option<String>,

    /// Show only expenses or only income
    #[arg(short = 't', long = "type", default_value_t = TypeFilter::All)]
    pub type_filter: TypeFilter,

    /// Case-insensitive substring of the category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive substring of the description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Write the ledger to a CSV file instead of the terminal
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl LedgerArgs {
    /// Build the filter state these arguments describe
    pub fn filter_state(&self) -> TrackerResult<FilterState> {
        let mut state = FilterState::new()
            .type_filter(self.type_filter)
            .category(self.category.clone().unwrap_or_default())
            .description(self.description.clone().unwrap_or_default());

        if let Some(from) = &self.from {
            state = state.date_from(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            state = state.date_to(parse_date(to)?);
        }
        Ok(state)
    }
}

/// Handle the ledger command
pub fn handle_ledger_command(
    storage: &Storage,
    settings: &Settings,
    args: LedgerArgs,
) -> TrackerResult<()> {
    let period = parse_period(args.period.as_deref(), settings)?;
    let state = args.filter_state()?;

    let view = load_ledger(storage, &period);
    print_notice(view.notice.as_deref());

    let ledger = filter_ledger(&view.ledger, &state);

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        export_ledger_csv(&ledger, &mut writer)?;
        writer
            .flush()
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        println!("Ledger exported to: {}", path.display());
        return Ok(());
    }

    println!("Ledger - {}", period);
    if !state.is_empty() {
        println!("({} of {} transactions match)", ledger.len(), view.ledger.len());
    }
    println!();
    print!("{}", format_ledger(&ledger, &display_options(settings)));

    Ok(())
}
