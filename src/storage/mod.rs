//! Storage layer for fintrack
//!
//! JSON file storage with atomic writes. `Storage` is the reference
//! `LedgerSource`: it re-reads the expense, income and budget files on every
//! fetch so that a damaged file surfaces as a fetch error for that call only.

pub mod budgets;
pub mod file_io;
pub mod records;
pub mod templates;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use records::RecordRepository;
pub use templates::TemplateRepository;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{BudgetSettings, Period, PeriodicTemplate, RawRecord};
use crate::services::LedgerSource;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: RecordRepository,
    pub income: RecordRepository,
    pub budgets: BudgetRepository,
    pub templates: TemplateRepository,
}

impl Storage {
    /// Create a new Storage instance. Nothing is read until a repository is loaded.
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: RecordRepository::new(paths.expenses_file()),
            income: RecordRepository::new(paths.income_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            templates: TemplateRepository::new(paths.templates_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}

impl LedgerSource for Storage {
    fn list_expenses(&self, period: &Period) -> Result<Vec<RawRecord>, TrackerError> {
        self.expenses.load()?;
        self.expenses.get_for_period(period)
    }

    fn list_income(&self, period: &Period) -> Result<Vec<RawRecord>, TrackerError> {
        self.income.load()?;
        self.income.get_for_period(period)
    }

    fn budget_settings(&self) -> Result<BudgetSettings, TrackerError> {
        self.budgets.load()?;
        self.budgets.get()
    }

    fn list_templates(&self) -> Result<Vec<PeriodicTemplate>, TrackerError> {
        self.templates.load()?;
        self.templates.get_all()
    }
}
