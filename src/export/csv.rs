//! CSV export functionality
//!
//! Exports comparison rows and ledgers in a spreadsheet-compatible layout.
//! Amounts are written as plain decimals without a currency symbol.

use std::io::Write;

use crate::error::TrackerResult;
use crate::models::{Money, Transaction};
use crate::reports::BudgetReport;

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.to_decimal())
}

fn optional_decimal(amount: Option<Money>) -> String {
    amount.map(decimal).unwrap_or_default()
}

/// Export a budget report: one line per row, then a TOTAL line
pub fn export_report_csv<W: Write>(report: &BudgetReport, writer: W) -> TrackerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "Period",
        "Mode",
        "Category",
        "Budget",
        "Actual",
        "Actual Expense",
        "Actual Income",
        "Difference",
    ])?;

    let period = report.period.to_string();
    let mode = report.mode().to_string();

    for row in report.rows() {
        wtr.write_record([
            period.clone(),
            mode.clone(),
            row.category.to_string(),
            decimal(row.budget),
            decimal(row.actual),
            optional_decimal(row.actual_expense),
            optional_decimal(row.actual_income),
            decimal(row.difference),
        ])?;
    }

    let totals = &report.reconciliation.totals;
    wtr.write_record([
        period,
        mode,
        "TOTAL".to_string(),
        decimal(totals.total_budget),
        decimal(totals.total_actual),
        String::new(),
        String::new(),
        decimal(totals.total_difference),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Export a ledger in the order given
pub fn export_ledger_csv<W: Write>(ledger: &[Transaction], writer: W) -> TrackerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ID", "Date", "Dated", "Category", "Description", "Amount"])?;

    for txn in ledger {
        wtr.write_record([
            txn.id.to_string(),
            txn.effective_date().format("%Y-%m-%d").to_string(),
            if txn.occurred_on.is_some() { "yes" } else { "no" }.to_string(),
            txn.category.clone(),
            txn.description.clone(),
            decimal(txn.amount),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Period, TransactionId, ViewMode};
    use crate::reports::{reconcile, SortState};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn txn(category: &str, cents: i64) -> Transaction {
        Transaction::new(
            TransactionId::new("t-1"),
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, 3, 4),
            Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap(),
        )
        .with_description("Lunch, with \"friends\"")
    }

    fn report(mode: ViewMode) -> BudgetReport {
        let ledger = vec![txn("Food", -1250), txn("Food", 500)];
        BudgetReport {
            period: Period::month(2025, 3),
            sort: SortState::default(),
            reconciliation: reconcile(&ledger, &Default::default(), mode),
            transaction_count: ledger.len(),
            notice: None,
        }
    }

    #[test]
    fn test_report_csv_expenses() {
        let mut out = Vec::new();
        export_report_csv(&report(ViewMode::Expenses), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Period,Mode,Category,Budget,Actual,Actual Expense,Actual Income,Difference"
        );
        assert_eq!(lines[1], "2025-03,expenses,Food,0.00,12.50,,,12.50");
        assert_eq!(lines[2], "2025-03,expenses,TOTAL,0.00,12.50,,,12.50");
    }

    #[test]
    fn test_report_csv_all_mode_fills_split_columns() {
        let mut out = Vec::new();
        export_report_csv(&report(ViewMode::All), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("2025-03,all,Food,0.00,17.50,12.50,5.00,17.50"));
    }

    #[test]
    fn test_ledger_csv_quotes_fields() {
        let mut out = Vec::new();
        export_ledger_csv(&[txn("Food", -1250)], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("ID,Date,Dated,Category,Description,Amount\n"));
        assert!(text.contains("t-1,2025-03-04,yes,Food,\"Lunch, with \"\"friends\"\"\",-12.50"));
    }
}
