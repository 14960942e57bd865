//! The immutable transaction snapshot queried by every operation.

use chrono::NaiveDate;

use crate::types::TransactionRecord;

/// An immutable, in-memory batch of transaction records.
///
/// A store is loaded once per dataset version and then only read. Hosts
/// serving concurrent queries share a single store behind an `Arc` so every
/// reader sees the same snapshot; nothing in the engine mutates it. There
/// is deliberately no interior caching here: derived series are pure
/// functions of their inputs and are recomputed per query.
///
/// Records keep their source order and are not required to be sorted or
/// contiguous by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionStore {
    records: Vec<TransactionRecord>,
}

impl TransactionStore {
    /// Wrap already-validated records into a snapshot.
    ///
    /// Validation (schema, positivity, revenue consistency) happens at the
    /// ingestion boundary; the store itself accepts what it is given.
    #[must_use]
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    /// All records, in source order.
    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Number of transaction lines in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest transaction date, or `None` for an empty store.
    ///
    /// The presentation layer seeds its date-range pickers from this.
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().map(|r| r.date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(min, max), d| {
            (min.min(d), max.max(d))
        });
        Some((min, max))
    }

    /// Sorted, de-duplicated category names present in the snapshot.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = self.records.iter().map(|r| r.category.clone()).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Sorted, de-duplicated product names present in the snapshot.
    #[must_use]
    pub fn products(&self) -> Vec<String> {
        let mut out: Vec<String> = self.records.iter().map(|r| r.product.clone()).collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
