//! Periodic template service
//!
//! Create, list and delete recurring-transaction templates. Templates are
//! stored as-is; nothing here schedules or materializes them.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{EntryKind, Frequency, Money, PeriodicTemplate, TemplateId};
use crate::storage::Storage;

/// Service for periodic template management
pub struct TemplateService<'a> {
    storage: &'a Storage,
}

impl<'a> TemplateService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a template.
    ///
    /// Category and description are trimmed; the amount must not be negative.
    pub fn create(
        &self,
        kind: EntryKind,
        amount: Money,
        category: &str,
        description: &str,
        frequency: Frequency,
    ) -> TrackerResult<PeriodicTemplate> {
        let template = PeriodicTemplate::new(
            kind,
            amount,
            category.trim(),
            description.trim(),
            frequency,
        );

        template
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.templates.load()?;
        self.storage.templates.insert(template.clone())?;
        self.storage.templates.save()?;

        info!(id = %template.id, category = %template.category, "created template");
        Ok(template)
    }

    /// All templates in creation order
    pub fn list(&self) -> TrackerResult<Vec<PeriodicTemplate>> {
        self.storage.templates.load()?;
        self.storage.templates.get_all()
    }

    /// Find a template by full id or by the short form shown in listings
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<PeriodicTemplate>> {
        let templates = self.list()?;

        if let Ok(id) = identifier.parse::<TemplateId>() {
            if let Some(found) = templates.iter().find(|t| t.id == id) {
                return Ok(Some(found.clone()));
            }
        }

        let mut matches = templates
            .into_iter()
            .filter(|t| t.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(Some(found)),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Template id '{}' is ambiguous",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Delete a template by id or id prefix
    pub fn delete(&self, identifier: &str) -> TrackerResult<PeriodicTemplate> {
        let template = self
            .find(identifier)?
            .ok_or_else(|| TrackerError::template_not_found(identifier))?;

        self.storage
            .templates
            .delete(template.id)?
            .ok_or_else(|| TrackerError::template_not_found(identifier))?;
        self.storage.templates.save()?;

        info!(id = %template.id, "deleted template");
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_trims_and_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        let template = service
            .create(
                EntryKind::Expense,
                Money::from_units(900),
                "  Rent ",
                " Flat ",
                Frequency::Monthly,
            )
            .unwrap();
        assert_eq!(template.category, "Rent");
        assert_eq!(template.description, "Flat");

        let reopened = Storage::new(storage.paths().clone()).unwrap();
        let listed = TemplateService::new(&reopened).list().unwrap();
        assert_eq!(listed, vec![template]);
    }

    #[test]
    fn test_create_rejects_negative_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        let err = service
            .create(
                EntryKind::Income,
                Money::from_cents(-1),
                "Salary",
                "",
                Frequency::Monthly,
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_blank_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        let result = service.create(
            EntryKind::Expense,
            Money::from_units(5),
            "   ",
            "",
            Frequency::Weekly,
        );
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_list_keeps_creation_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        for category in ["Rent", "Gym", "Salary"] {
            service
                .create(
                    EntryKind::Expense,
                    Money::from_units(1),
                    category,
                    "",
                    Frequency::Monthly,
                )
                .unwrap();
        }

        let categories: Vec<_> = service
            .list()
            .unwrap()
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(categories, vec!["Rent", "Gym", "Salary"]);
    }

    #[test]
    fn test_delete_by_full_id_and_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        let first = service
            .create(EntryKind::Expense, Money::from_units(1), "A", "", Frequency::Monthly)
            .unwrap();
        let second = service
            .create(EntryKind::Expense, Money::from_units(2), "B", "", Frequency::Monthly)
            .unwrap();

        service.delete(&first.id.as_uuid().to_string()).unwrap();
        service.delete(&second.id.to_string()).unwrap();
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        let err = service.delete("tpl-deadbeef").unwrap_err();
        assert!(err.is_not_found());
    }
}
