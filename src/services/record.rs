//! Entry recording service
//!
//! Appends expense and income records to the stored collections in the same
//! loose shape upstream collections use.

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{EntryKind, Money, RawRecord, Transaction, TransactionId};
use crate::storage::{RecordRepository, Storage};

use super::normalize::normalize;

/// Service for recording new ledger entries
pub struct RecordService<'a> {
    storage: &'a Storage,
}

impl<'a> RecordService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn repository(&self, kind: EntryKind) -> &RecordRepository {
        match kind {
            EntryKind::Expense => &self.storage.expenses,
            EntryKind::Income => &self.storage.income,
        }
    }

    /// Record an entry and return it as it will appear in the ledger.
    ///
    /// The amount is stored unsigned; the collection it lands in decides the sign.
    pub fn record(
        &self,
        kind: EntryKind,
        amount: Money,
        category: &str,
        description: &str,
        occurred_on: Option<NaiveDate>,
    ) -> TrackerResult<Transaction> {
        if amount.is_zero() {
            return Err(TrackerError::Validation("Amount cannot be zero".into()));
        }

        let mut raw = RawRecord::with_amount(amount.abs())
            .id(TransactionId::generate().as_str())
            .category(category.trim())
            .description(description.trim())
            .created_at(Utc::now());
        raw.occurred_on = occurred_on;

        let repository = self.repository(kind);
        repository.load()?;
        repository.push(raw.clone())?;
        repository.save()?;

        let txn = normalize(&raw, kind);
        info!(id = %txn.id, %kind, amount = %txn.amount, "recorded entry");
        Ok(txn)
    }
}
