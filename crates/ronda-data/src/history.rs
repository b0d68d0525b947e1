//! In-memory financial history store.

use ronda_traits::{FinancialHistoryProvider, QuarterlyRecord, Result};
use std::collections::HashMap;

/// A [`FinancialHistoryProvider`] backed by a plain in-memory map.
///
/// Suitable for tests and for embedding the engine behind an application
/// layer that loads statements up front. Records are returned as stored;
/// the engine does its own sorting and deduplication.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryProvider {
    records: HashMap<String, Vec<QuarterlyRecord>>,
}

impl InMemoryHistoryProvider {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a flat record list, grouping by symbol.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = QuarterlyRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Add one quarterly record under its own symbol.
    pub fn insert(&mut self, record: QuarterlyRecord) {
        self.records
            .entry(record.symbol.clone())
            .or_default()
            .push(record);
    }

    /// Symbols with at least one stored record.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    /// Number of records stored for `symbol`.
    #[must_use]
    pub fn len(&self, symbol: &str) -> usize {
        self.records.get(symbol).map_or(0, Vec::len)
    }

    /// Whether the store holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FinancialHistoryProvider for InMemoryHistoryProvider {
    fn history(&self, symbol: &str) -> Result<Vec<QuarterlyRecord>> {
        Ok(self.records.get(symbol).cloned().unwrap_or_default())
    }
}
