//! Periodic template repository for JSON storage
//!
//! Manages loading and saving templates to templates.json. Templates keep
//! their creation order on disk and in listings.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{PeriodicTemplate, TemplateId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TemplateData {
    #[serde(default)]
    templates: Vec<PeriodicTemplate>,
}

/// Repository for periodic templates
pub struct TemplateRepository {
    path: PathBuf,
    templates: RwLock<Vec<PeriodicTemplate>>,
}

impl TemplateRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            templates: RwLock::new(Vec::new()),
        }
    }

    /// Load templates from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: TemplateData = read_json(&self.path)?;

        let mut templates = self
            .templates
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *templates = file_data.templates;
        Ok(())
    }

    /// Save templates to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let templates = self
            .templates
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TemplateData {
            templates: templates.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append a template
    pub fn insert(&self, template: PeriodicTemplate) -> Result<(), TrackerError> {
        let mut templates = self
            .templates
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        templates.push(template);
        Ok(())
    }

    /// All templates in creation order
    pub fn get_all(&self) -> Result<Vec<PeriodicTemplate>, TrackerError> {
        let templates = self
            .templates
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(templates.clone())
    }

    /// Delete a template by id, returning it if it existed
    pub fn delete(&self, id: TemplateId) -> Result<Option<PeriodicTemplate>, TrackerError> {
        let mut templates = self
            .templates
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(templates
            .iter()
            .position(|t| t.id == id)
            .map(|index| templates.remove(index)))
    }
}
