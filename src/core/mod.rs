//! Core module containing the list query engine and its building blocks

pub mod category;
pub mod comparator;
pub mod engine;
pub mod error;
pub mod field;
pub mod predicate;
pub mod query;
pub mod record;
pub mod schema;
pub mod service;
pub mod store;
pub mod view;

pub use category::Category;
pub use comparator::RecordComparator;
pub use engine::{CompiledQuery, QueryEngine};
pub use error::{ConfigurationError, PortalError};
pub use field::{FieldKind, FieldValue, SortKey};
pub use predicate::RecordPredicate;
pub use query::{CategoryFilter, PaginatedResponse, PaginationMeta, Query, QueryParams, SortDirection};
pub use record::{DynamicRecord, ID_FIELD, Record};
pub use schema::{FieldDescriptor, RecordSchema, RecordSchemaBuilder, SortSpec};
pub use service::RecordSource;
pub use store::RecordStore;
pub use view::ListView;
