//! Template CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_kind};
use crate::config::settings::Settings;
use crate::display::{format_money, format_template_list};
use crate::error::TrackerResult;
use crate::models::Frequency;
use crate::services::TemplateService;
use crate::storage::Storage;

/// Template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Record a recurring expense or income
    Add {
        /// expense or income
        kind: String,
        /// Amount per occurrence (e.g. "900")
        amount: String,
        /// Category name
        category: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// monthly or weekly
        #[arg(short, long, default_value_t = Frequency::Monthly)]
        frequency: Frequency,
    },

    /// List templates in creation order
    #[command(alias = "ls")]
    List,

    /// Delete a template by id (the short id shown by `list` works too)
    #[command(alias = "rm")]
    Remove {
        id: String,
    },
}

/// Handle a template command
pub fn handle_template_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TemplateCommands,
) -> TrackerResult<()> {
    let service = TemplateService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TemplateCommands::Add {
            kind,
            amount,
            category,
            description,
            frequency,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;
            let template = service.create(kind, amount, &category, &description, frequency)?;
            println!(
                "Created template {}: {} {} {} ({})",
                template.id,
                template.frequency,
                template.kind,
                format_money(template.amount, symbol),
                template.category
            );
        }

        TemplateCommands::List => {
            let templates = service.list()?;
            print!("{}", format_template_list(&templates, symbol));
        }

        TemplateCommands::Remove { id } => {
            let removed = service.delete(&id)?;
            println!("Deleted template {} ({})", removed.id, removed.category);
        }
    }

    Ok(())
}
