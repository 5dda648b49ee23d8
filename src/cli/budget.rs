//! Budget CLI commands
//!
//! Set, list and remove monthly category targets.

use clap::Subcommand;

use super::{parse_amount, parse_kind};
use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_money};
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly target for a category
    Set {
        /// Category name
        category: String,
        /// Monthly amount (e.g. "200" or "199.99")
        amount: String,
        /// Which side of the ledger the target applies to
        #[arg(short, long, default_value = "expense")]
        kind: String,
    },

    /// List all budget targets
    #[command(alias = "ls")]
    List,

    /// Remove the target for a category
    #[command(alias = "rm")]
    Remove {
        /// Category name
        category: String,
        #[arg(short, long, default_value = "expense")]
        kind: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            kind,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;
            let budget = service.set(&category, amount, kind)?;
            println!(
                "{} budget for '{}' set to {} per month",
                budget.kind,
                budget.category,
                format_money(budget.monthly_amount, symbol)
            );
        }

        BudgetCommands::List => {
            let settings = service.list()?;
            print!("{}", format_budget_list(&settings, symbol));
        }

        BudgetCommands::Remove { category, kind } => {
            let kind = parse_kind(&kind)?;
            let removed = service.remove(&category, kind)?;
            println!("Removed {} budget for '{}'", removed.kind, removed.category);
        }
    }

    Ok(())
}
