use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use fintrack::cli::{
    handle_add_command, handle_budget_command, handle_ledger_command, handle_report_command,
    handle_template_command, AddArgs, BudgetCommands, LedgerArgs, ReportArgs, TemplateCommands,
};
use fintrack::config::{paths::TrackerPaths, settings::Settings};
use fintrack::logging::init_tracing;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker with budget-vs-actual reconciliation",
    long_about = "fintrack keeps expense and income records, merges them into a single \
                  signed ledger, and compares what you spent and earned against \
                  per-category monthly budgets."
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense or income entry
    Add(AddArgs),

    /// Show the merged ledger for a period
    #[command(alias = "ls")]
    Ledger(LedgerArgs),

    /// Budget vs. actual report
    Report(ReportArgs),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Periodic template commands
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Show configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::Ledger(args)) => handle_ledger_command(&storage, &settings, args)?,
        Some(Commands::Report(args)) => handle_report_command(&storage, &settings, args)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Template(cmd)) => handle_template_command(&storage, &settings, cmd)?,
        Some(Commands::Config) => {
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default view mode: {}", settings.default_view_mode);
            println!("  Default period:    {:?}", settings.default_period);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report' for this month's budget vs. actual.");
        }
    }

    Ok(())
}
