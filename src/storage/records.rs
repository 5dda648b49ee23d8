//! Raw record repository for JSON storage
//!
//! Expense and income collections are stored as plain JSON arrays in
//! `expenses.json` and `income.json`. Records are kept as `RawRecord`s: the
//! file is upstream data and is not validated on load beyond being JSON.

use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;
use tracing::debug;

use crate::error::TrackerError;
use crate::models::{Period, RawRecord};

use super::file_io::{read_json, write_json_atomic};

/// Repository for one raw transaction collection
pub struct RecordRepository {
    path: PathBuf,
    records: RwLock<Vec<RawRecord>>,
}

impl RecordRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> Result<(), TrackerError> {
        let values: Vec<Value> = read_json(&self.path)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = values.iter().map(RawRecord::from_json).collect();
        debug!(path = %self.path.display(), count = records.len(), "loaded raw records");
        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let records = self
            .records
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let values: Vec<Value> = records.iter().map(RawRecord::to_json).collect();
        write_json_atomic(&self.path, &values)
    }

    /// Append a record (in memory; call `save` to persist)
    pub fn push(&self, record: RawRecord) -> Result<(), TrackerError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.push(record);
        Ok(())
    }

    /// All records in file order
    pub fn get_all(&self) -> Result<Vec<RawRecord>, TrackerError> {
        let records = self
            .records
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    /// Records whose effective date falls in `period`, in file order.
    ///
    /// The effective date is `occurred_on`, else the day of `created_at`.
    /// Records with neither cannot be placed in any period and are skipped.
    pub fn get_for_period(&self, period: &Period) -> Result<Vec<RawRecord>, TrackerError> {
        let records = self
            .records
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records
            .iter()
            .filter(|r| {
                r.occurred_on
                    .or_else(|| r.created_at.map(|at| at.date_naive()))
                    .is_some_and(|date| period.contains(date))
            })
            .cloned()
            .collect())
    }
}
