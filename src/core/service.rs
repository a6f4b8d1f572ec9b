//! Service trait for supplying records to list pages

use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Source of the records behind one list page
///
/// This is the seam to the hosted backend. Implementations are constructed
/// once at application startup and handed to whatever needs them (see
/// [`Portal`](crate::portal::Portal)); nothing in the engine reaches for a
/// global client. The engine is agnostic to where records come from.
#[async_trait]
pub trait RecordSource<R: Record>: Send + Sync {
    /// Fetch every record of the list, in backend order
    async fn fetch_all(&self) -> Result<Vec<R>>;

    /// Fetch a single record by ID
    async fn fetch(&self, id: &str) -> Result<Option<R>> {
        Ok(self.fetch_all().await?.into_iter().find(|r| r.id() == id))
    }
}
