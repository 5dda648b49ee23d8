//! Configuration module for fintrack
//!
//! Path resolution for the data directory and persisted user preferences.

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
