//! Budget target service
//!
//! Sets, lists and removes monthly category targets. Category names are
//! trimmed on the way in; amounts are stored as absolute values.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetSettings, CategoryBudget, CategoryKey, EntryKind, Money};
use crate::storage::Storage;

/// Service for budget target management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly target for a category, replacing any existing one of the same kind
    pub fn set(&self, category: &str, amount: Money, kind: EntryKind) -> TrackerResult<CategoryBudget> {
        let key = CategoryKey::new(category);
        if key.is_empty() {
            return Err(TrackerError::Validation(
                "Budget category cannot be empty".into(),
            ));
        }

        let budget = CategoryBudget::new(key, amount, kind);

        self.storage.budgets.load()?;
        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        info!(category = %budget.category, %kind, amount = %budget.monthly_amount, "set budget");
        Ok(budget)
    }

    /// Current budget settings
    pub fn list(&self) -> TrackerResult<BudgetSettings> {
        self.storage.budgets.load()?;
        self.storage.budgets.get()
    }

    /// Remove the target for a category and kind
    pub fn remove(&self, category: &str, kind: EntryKind) -> TrackerResult<CategoryBudget> {
        let key = CategoryKey::new(category);

        self.storage.budgets.load()?;
        let removed = self
            .storage
            .budgets
            .delete(&key, kind)?
            .ok_or_else(|| TrackerError::budget_not_found(format!("{} ({})", key, kind)))?;
        self.storage.budgets.save()?;

        info!(category = %key, %kind, "removed budget");
        Ok(removed)
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
    fn test_set_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set(" Food ", Money::from_units(200), EntryKind::Expense)
            .unwrap();
        service
            .set("Salary", Money::from_units(3000), EntryKind::Income)
            .unwrap();

        let settings = service.list().unwrap();
        assert_eq!(settings.expenses[0].category.as_str(), "Food");
        assert_eq!(settings.income[0].monthly_amount, Money::from_units(3000));
    }

    #[test]
    fn test_set_replaces_same_kind() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set("Food", Money::from_units(200), EntryKind::Expense)
            .unwrap();
        service
            .set("Food", Money::from_units(250), EntryKind::Expense)
            .unwrap();

        let settings = service.list().unwrap();
        assert_eq!(settings.expenses.len(), 1);
        assert_eq!(settings.expenses[0].monthly_amount, Money::from_units(250));
    }

    #[test]
    fn test_set_rejects_blank_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service
            .set("  ", Money::from_units(1), EntryKind::Expense)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set("Food", Money::from_units(200), EntryKind::Expense)
            .unwrap();

        assert!(service.remove("Food", EntryKind::Income).unwrap_err().is_not_found());
        service.remove("Food", EntryKind::Expense).unwrap();
        assert!(service.list().unwrap().is_empty());
    }
}
