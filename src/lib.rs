//! fintrack - personal finance tracker
//!
//! Merges stored expense and income records into a single signed ledger,
//! narrows it with composable filters, and reconciles actual spending and
//! earnings against per-category monthly budgets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (records, transactions, budgets, periods, templates)
//! - `storage`: JSON file storage layer
//! - `services`: Normalization, ledger merging, filtering and record management
//! - `reports`: Budget reconciliation and sorting
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML report export
//! - `cli`: Command handlers
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::TrackerPaths, settings::Settings};
//! use fintrack::models::{Period, ViewMode};
//! use fintrack::reports::{BudgetReport, SortState};
//! use fintrack::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let storage = Storage::new(paths)?;
//! let report = BudgetReport::generate(&storage, &Period::month(2025, 3), ViewMode::All, SortState::default());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
