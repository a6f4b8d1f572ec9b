//! In-memory implementation of RecordSource for fixtures, testing and development

use crate::core::{Record, RecordSource};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory record source
///
/// Serves static fixture data, or whatever was last [`replace`](Self::replace)d.
/// Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryRecordSource<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> InMemoryRecordSource<R> {
    /// Create a new in-memory source holding `records`
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Swap the served records, as a backend refresh would
    pub fn replace(&self, records: Vec<R>) -> Result<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        *guard = records;
        Ok(())
    }
}

impl<R: Record> Default for InMemoryRecordSource<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl<R: Record> RecordSource<R> for InMemoryRecordSource<R> {
    async fn fetch_all(&self) -> Result<Vec<R>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.clone())
    }

    async fn fetch(&self, id: &str) -> Result<Option<R>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }
}
