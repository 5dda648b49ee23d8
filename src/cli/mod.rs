//! CLI command handlers
//!
//! Bridges clap argument parsing with the service and report layers. Shared
//! argument parsing lives here so every command reads periods, dates, amounts
//! and kinds the same way.

pub mod budget;
pub mod ledger;
pub mod record;
pub mod report;
pub mod template;

pub use budget::{handle_budget_command, BudgetCommands};
pub use ledger::{handle_ledger_command, LedgerArgs};
pub use record::{handle_add_command, AddArgs};
pub use report::{handle_report_command, ReportArgs};
pub use template::{handle_template_command, TemplateCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::DisplayOptions;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{EntryKind, Money, Period};

/// Resolve a `--period` argument, falling back to the configured default
pub fn parse_period(period: Option<&str>, settings: &Settings) -> TrackerResult<Period> {
    match period {
        Some(text) => Period::parse(text).map_err(|e| {
            TrackerError::Validation(format!(
                "Invalid period: {}. Use YYYY-MM, YYYY, current, this-year or last",
                e
            ))
        }),
        None => Ok(Period::current(settings.default_period)),
    }
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(text: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date: {}. Use YYYY-MM-DD", text))
    })
}

pub fn parse_amount(text: &str) -> TrackerResult<Money> {
    Money::parse(text).map_err(|e| TrackerError::Validation(e.to_string()))
}

pub fn parse_kind(text: &str) -> TrackerResult<EntryKind> {
    EntryKind::parse(text).ok_or_else(|| {
        TrackerError::Validation(format!(
            "Invalid kind: {}. Use expense or income",
            text
        ))
    })
}

pub fn display_options(settings: &Settings) -> DisplayOptions {
    DisplayOptions {
        currency_symbol: settings.currency_symbol.clone(),
        date_format: settings.date_format.clone(),
    }
}

/// Print a non-fatal notice from a degraded load
pub fn print_notice(notice: Option<&str>) {
    if let Some(notice) = notice {
        eprintln!("Warning: {}", notice);
    }
}

/// Open a buffered writer for an export file
pub fn create_output(path: &Path) -> TrackerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodKind;

    #[test]
    fn test_parse_period_defaults_from_settings() {
        let settings = Settings {
            default_period: PeriodKind::Year,
            ..Settings::default()
        };
        assert_eq!(parse_period(None, &settings).unwrap(), Period::current_year());
        assert_eq!(
            parse_period(Some("2025-03"), &settings).unwrap(),
            Period::month(2025, 3)
        );
        assert!(parse_period(Some("2025-13"), &settings)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
        );
        assert!(parse_date("31/03/2025").is_err());
    }

    #[test]
    fn test_parse_amount_and_kind() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("abc").is_err());
        assert_eq!(parse_kind("income").unwrap(), EntryKind::Income);
        assert!(parse_kind("transfer").is_err());
    }
}
