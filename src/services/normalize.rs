//! Transaction normalizer
//!
//! Converts raw expense and income records into `Transaction`s with the sign
//! convention enforced: expenses negative, income positive, whatever sign the
//! upstream record carried.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::models::{EntryKind, Money, RawRecord, Transaction, TransactionId};

/// Normalize one raw record as the given kind.
///
/// Missing fields take their defaults: amount zero, strings empty, a freshly
/// generated id, and the Unix epoch for `created_at`. A missing `occurred_on`
/// stays missing; ordering falls back to `created_at` without writing it back.
pub fn normalize(raw: &RawRecord, kind: EntryKind) -> Transaction {
    let amount = raw.amount.unwrap_or_else(|| {
        trace!(id = ?raw.id, "raw record has no usable amount, using zero");
        Money::zero()
    });

    Transaction {
        id: raw
            .id
            .as_deref()
            .map(TransactionId::new)
            .unwrap_or_else(TransactionId::generate),
        amount: kind.signed(amount),
        category: raw.category.clone().unwrap_or_default(),
        description: raw.description.clone().unwrap_or_default(),
        occurred_on: raw.occurred_on,
        created_at: raw.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
    }
}

/// Normalize a collection of raw expense records
pub fn normalize_expenses(records: &[RawRecord]) -> Vec<Transaction> {
    records
        .iter()
        .map(|r| normalize(r, EntryKind::Expense))
        .collect()
}

/// Normalize a collection of raw income records
pub fn normalize_income(records: &[RawRecord]) -> Vec<Transaction> {
    records
        .iter()
        .map(|r| normalize(r, EntryKind::Income))
        .collect()
}
