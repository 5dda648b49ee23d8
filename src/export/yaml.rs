//! YAML export functionality

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::ReportExport;
use crate::reports::BudgetReport;

/// Export a budget report as YAML with a short header comment
pub fn export_report_yaml<W: Write>(report: &BudgetReport, writer: &mut W) -> TrackerResult<()> {
    let export = ReportExport::from_report(report);

    writeln!(writer, "# fintrack budget report")
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Period: {} ({})", export.period, export.mode)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Period, TransactionId, Transaction, ViewMode};
    use crate::reports::{reconcile, SortState};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_yaml_export() {
        let ledger = vec![Transaction::new(
            TransactionId::new("t"),
            Money::from_units(-50),
            "Food",
            None,
            Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap(),
        )];
        let report = BudgetReport {
            period: Period::month(2025, 3),
            sort: SortState::default(),
            reconciliation: reconcile(&ledger, &Default::default(), ViewMode::All),
            transaction_count: 1,
            notice: None,
        };

        let mut out = Vec::new();
        export_report_yaml(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# fintrack budget report\n"));
        assert!(text.contains("# Period: 2025-03 (all)"));
        assert!(text.contains("actual_expense: 5000"));

        let yaml_body: String = text.lines().filter(|l| !l.starts_with('#')).collect::<Vec<_>>().join("\n");
        let parsed: ReportExport = serde_yaml::from_str(&yaml_body).unwrap();
        assert_eq!(parsed.rows[0].actual, Money::from_units(50));
    }
}
