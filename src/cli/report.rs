//! Report CLI command
//!
//! Budget vs. actual for a period. Each `--sort` is applied in turn through
//! the sort controller, so `--sort actual --sort actual` sorts descending.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use super::{create_output, parse_period, print_notice};
use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml, ExportFormat};
use crate::models::ViewMode;
use crate::reports::{apply_sort, BudgetReport, SortKey, SortState};
use crate::storage::Storage;

#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Period to report on (e.g. "2025-03", "2025", "current", "this-year")
    #[arg(short, long)]
    pub period: Option<String>,

    /// Which side of the ledger to compare: expenses, income or all
    #[arg(short, long)]
    pub mode: Option<ViewMode>,

    /// Sort column; repeat the same column to flip direction
    #[arg(short, long = "sort", value_name = "KEY")]
    pub sort: Vec<SortKey>,

    /// Export to a file instead of the terminal
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the output file's extension, then CSV)
    #[arg(short, long)]
    pub format: Option<ExportFormat>,
}

impl ReportArgs {
    /// Fold the requested sort keys through the sort controller
    pub fn sort_state(&self) -> SortState {
        self.sort
            .iter()
            .fold(SortState::default(), |state, &key| apply_sort(state, key))
    }
}

/// Handle the report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> TrackerResult<()> {
    let period = parse_period(args.period.as_deref(), settings)?;
    let mode = args.mode.unwrap_or(settings.default_view_mode);
    let sort = args.sort_state();

    let report = BudgetReport::generate(storage, &period, mode, sort);
    print_notice(report.notice.as_deref());

    let Some(path) = args.output else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
        return Ok(());
    };

    let format = args
        .format
        .or_else(|| ExportFormat::from_path(&path))
        .unwrap_or_default();

    let mut writer = create_output(&path)?;
    match format {
        ExportFormat::Csv => export_report_csv(&report, &mut writer)?,
        ExportFormat::Json => export_report_json(&report, &mut writer)?,
        ExportFormat::Yaml => export_report_yaml(&report, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    println!("Budget report ({}) exported to: {}", format, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::SortDirection;

    #[test]
    fn test_sort_state_folds_through_apply_sort() {
        let args = ReportArgs {
            sort: vec![SortKey::Actual, SortKey::Actual],
            ..ReportArgs::default()
        };
        let state = args.sort_state();
        assert_eq!(state.key, Some(SortKey::Actual));
        assert_eq!(state.direction, SortDirection::Desc);

        let args = ReportArgs {
            sort: vec![SortKey::Actual, SortKey::Actual, SortKey::Category],
            ..ReportArgs::default()
        };
        assert_eq!(args.sort_state().direction, SortDirection::Asc);
    }

    #[test]
    fn test_no_sort_keeps_default() {
        assert_eq!(ReportArgs::default().sort_state(), SortState::default());
    }
}
