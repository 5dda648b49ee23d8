//! JSON export functionality
//!
//! Exports a budget report with schema versioning. Amounts are integer cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Period, ViewMode};
use crate::reports::{AggregationRow, BudgetReport, SortState, Totals};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serializable form of a budget report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub period: Period,
    pub mode: ViewMode,
    pub sort: SortState,
    pub transaction_count: usize,
    pub rows: Vec<AggregationRow>,
    pub totals: Totals,
}

impl ReportExport {
    pub fn from_report(report: &BudgetReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            period: report.period,
            mode: report.mode(),
            sort: report.sort,
            transaction_count: report.transaction_count,
            rows: report.rows().to_vec(),
            totals: report.reconciliation.totals,
        }
    }
}

/// Export a budget report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &BudgetReport, writer: &mut W) -> TrackerResult<()> {
    let export = ReportExport::from_report(report);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
