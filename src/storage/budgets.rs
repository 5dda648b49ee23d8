//! Budget settings repository for JSON storage
//!
//! Manages loading and saving category budget targets to budgets.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{BudgetSettings, CategoryBudget, CategoryKey, EntryKind};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget target persistence
pub struct BudgetRepository {
    path: PathBuf,
    settings: RwLock<BudgetSettings>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            settings: RwLock::new(BudgetSettings::default()),
        }
    }

    /// Load budget settings from disk.
    ///
    /// Entries are re-applied through `BudgetSettings::set`, so a file holding
    /// the same trimmed category twice for one kind keeps the last entry.
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: BudgetSettings = read_json(&self.path)?;

        let mut settings = self
            .settings
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *settings = BudgetSettings::from_entries(
            file_data
                .expenses
                .into_iter()
                .map(|b| CategoryBudget::new(b.category, b.monthly_amount, EntryKind::Expense))
                .chain(
                    file_data
                        .income
                        .into_iter()
                        .map(|b| CategoryBudget::new(b.category, b.monthly_amount, EntryKind::Income)),
                ),
        );

        Ok(())
    }

    /// Save budget settings to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let settings = self
            .settings
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*settings)
    }

    /// Snapshot of the current settings
    pub fn get(&self) -> Result<BudgetSettings, TrackerError> {
        let settings = self
            .settings
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(settings.clone())
    }

    /// Insert or replace the target for (category, kind)
    pub fn upsert(&self, budget: CategoryBudget) -> Result<(), TrackerError> {
        let mut settings = self
            .settings
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        settings.set(budget);
        Ok(())
    }

    /// Remove the target for (category, kind)
    pub fn delete(
        &self,
        category: &CategoryKey,
        kind: EntryKind,
    ) -> Result<Option<CategoryBudget>, TrackerError> {
        let mut settings = self
            .settings
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(settings.remove(category, kind))
    }
}
