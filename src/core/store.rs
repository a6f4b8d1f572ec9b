//! Immutable in-memory record store

use crate::core::engine::QueryEngine;
use crate::core::error::ConfigurationError;
use crate::core::query::Query;
use crate::core::record::Record;
use crate::core::view::ListView;
use std::collections::HashSet;
use std::sync::Arc;

/// Records of one list page, loaded once and never mutated
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Arc<[R]>,
}

impl<R: Record> RecordStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                tracing::warn!(
                    record_type = R::record_type(),
                    id = record.id(),
                    "Duplicate record id in store; sort tie-breaks are no longer unique"
                );
            }
        }

        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by ID
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Run `query` through `engine` over this store's records
    pub fn query(
        &self,
        engine: &QueryEngine,
        query: &Query,
    ) -> Result<ListView<'_, R>, ConfigurationError> {
        engine.view(&self.records, query)
    }
}

impl<R: Record> From<Vec<R>> for RecordStore<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::DynamicRecord;
    use crate::core::schema::RecordSchema;

    #[test]
    fn test_get_by_id() {
        let store = RecordStore::new(vec![
            DynamicRecord::new("1").with("name", "Urban Assault"),
            DynamicRecord::new("2").with("name", "Desert Recon"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get("2").and_then(|r| r.fields.get("name")).and_then(|v| v.as_string()),
            Some("Desert Recon")
        );
        assert!(store.get("3").is_none());
    }

    #[test]
    fn test_clones_share_records() {
        let store: RecordStore<DynamicRecord> = vec![DynamicRecord::new("1")].into();
        let clone = store.clone();
        assert!(std::ptr::eq(store.records(), clone.records()));
    }

    #[test]
    fn test_query_empty_store() {
        let store = RecordStore::<DynamicRecord>::default();
        let engine = QueryEngine::new(RecordSchema::builder("record").build().unwrap());
        let view = store.query(&engine, &Query::new().search("x")).unwrap();
        assert!(view.is_empty());
        assert!(!view.has_no_matches());
    }
}
