//! Record trait defining the core abstraction for list rows

use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved field name under which every record exposes its identifier
pub const ID_FIELD: &str = "id";

/// Base trait for all rows a list page can search, filter and sort.
///
/// A record is a mapping from field name to value with a stable identifier.
/// Typed records (orders, loadouts, commendations) implement it by matching
/// on the field name; [`DynamicRecord`] implements it over a map.
pub trait Record: Clone + Send + Sync + 'static {
    /// The record type name (e.g., "order", "loadout")
    fn record_type() -> &'static str;

    /// Unique, stable identifier within its collection
    fn id(&self) -> &str;

    /// Get the value of a specific field by name
    ///
    /// Returns `None` for fields the record does not carry.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Field value with the reserved `id` key resolved to [`Record::id`]
    fn value_of(&self, field: &str) -> Option<FieldValue> {
        if field == ID_FIELD {
            Some(FieldValue::String(self.id().to_string()))
        } else {
            self.field_value(field)
        }
    }
}

/// A schemaless record backed by an insertion-ordered field map
///
/// Used for rows coming straight from the backend or from fixture files,
/// where no dedicated struct exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicRecord {
    pub id: String,

    #[serde(flatten)]
    pub fields: IndexMap<String, FieldValue>,
}

impl DynamicRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

impl Record for DynamicRecord {
    fn record_type() -> &'static str {
        "record"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.fields.get(field).cloned()
    }
}
