//! Portal context: the injected record sources and the list pages built on them

use crate::config::ListsConfig;
use crate::core::{
    ConfigurationError, ListView, PaginatedResponse, PortalError, Query, QueryEngine, QueryParams,
    Record, RecordSchema, RecordSource, RecordStore,
};
use crate::entities::{CatalogRecord, Commendation, Loadout, Order};
use crate::storage::InMemoryRecordSource;
use std::sync::Arc;

/// Application context, constructed once at startup
///
/// Owns the backend handles for every list page and the list configuration.
/// Pages are loaded on demand; each load fetches the records once and keeps
/// them for the page's lifetime.
///
/// # Example
///
/// ```rust,ignore
/// let portal = Portal::with_fixtures();
/// let orders = portal.orders().await?;
/// let view = orders.view(&Query::new().filter("status", "pending"))?;
/// ```
#[derive(Clone)]
pub struct Portal {
    config: ListsConfig,
    orders: Arc<dyn RecordSource<Order>>,
    loadouts: Arc<dyn RecordSource<Loadout>>,
    commendations: Arc<dyn RecordSource<Commendation>>,
}

impl Portal {
    pub fn new(
        config: ListsConfig,
        orders: Arc<dyn RecordSource<Order>>,
        loadouts: Arc<dyn RecordSource<Loadout>>,
        commendations: Arc<dyn RecordSource<Commendation>>,
    ) -> Self {
        Self {
            config,
            orders,
            loadouts,
            commendations,
        }
    }

    /// Portal serving the built-in fixture data with the default lists
    pub fn with_fixtures() -> Self {
        Self::new(
            ListsConfig::default_config(),
            Arc::new(InMemoryRecordSource::new(Order::fixtures())),
            Arc::new(InMemoryRecordSource::new(Loadout::fixtures())),
            Arc::new(InMemoryRecordSource::new(Commendation::fixtures())),
        )
    }

    pub fn config(&self) -> &ListsConfig {
        &self.config
    }

    pub async fn orders(&self) -> Result<ListPage<Order>, PortalError> {
        self.page(self.orders.as_ref()).await
    }

    pub async fn loadouts(&self) -> Result<ListPage<Loadout>, PortalError> {
        self.page(self.loadouts.as_ref()).await
    }

    pub async fn commendations(&self) -> Result<ListPage<Commendation>, PortalError> {
        self.page(self.commendations.as_ref()).await
    }

    /// Load every list page concurrently
    pub async fn load_all(
        &self,
    ) -> Result<(ListPage<Order>, ListPage<Loadout>, ListPage<Commendation>), PortalError> {
        tokio::try_join!(self.orders(), self.loadouts(), self.commendations())
    }

    async fn page<R: CatalogRecord>(
        &self,
        source: &dyn RecordSource<R>,
    ) -> Result<ListPage<R>, PortalError> {
        // Schema first: a broken list definition should not cost a fetch
        let schema = self.config.schema(R::list_name())?;
        schema.conforms_to(&R::schema()?).inspect_err(|e| {
            tracing::warn!(
                list = R::list_name(),
                code = e.error_code(),
                "List definition does not match the record type: {}",
                e
            );
        })?;
        ListPage::load(R::list_name(), source, schema).await
    }
}

/// One loaded list page: its records and the engine that queries them
#[derive(Debug, Clone)]
pub struct ListPage<R> {
    name: String,
    store: RecordStore<R>,
    engine: QueryEngine,
}

impl<R: Record> ListPage<R> {
    /// Fetch the page's records from `source`
    pub async fn load(
        name: &str,
        source: &dyn RecordSource<R>,
        schema: RecordSchema,
    ) -> Result<Self, PortalError> {
        let records = source.fetch_all().await.map_err(|source| {
            tracing::error!(list = name, error = %source, "Failed to load list page");
            PortalError::Source {
                list: name.to_string(),
                source,
            }
        })?;

        tracing::info!(list = name, records = records.len(), "List page loaded");
        Ok(Self::from_records(name, records, schema))
    }

    /// Build a page over records already in hand
    pub fn from_records(name: &str, records: Vec<R>, schema: RecordSchema) -> Self {
        Self {
            name: name.to_string(),
            store: RecordStore::new(records),
            engine: QueryEngine::new(schema),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Rows to display for the current query state
    pub fn view(&self, query: &Query) -> Result<ListView<'_, R>, ConfigurationError> {
        self.store.query(&self.engine, query)
    }

    /// Rows for request-style parameters, one page at a time
    pub fn view_params(
        &self,
        params: &QueryParams,
    ) -> Result<PaginatedResponse<R>, ConfigurationError> {
        let query = params.to_query()?;
        Ok(self.view(&query)?.paginate(params.page(), params.limit()))
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.store.get(id)
    }
}
