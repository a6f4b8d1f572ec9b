//! List configuration loading and management
//!
//! A list definition describes one list page: which fields the search box
//! matches, which category dropdowns it offers and which columns can be
//! sorted. Definitions are loaded from YAML and turned into a
//! [`RecordSchema`] when the page is built.
//!
//! ```yaml
//! lists:
//!   - name: loadouts
//!     record_type: loadout
//!     searchable: [name, description]
//!     categories:
//!       - field: terrain
//!         values: [urban, desert, jungle, arctic]
//!     sortable:
//!       - field: name
//!         kind: text
//!     default_sort:
//!       key: id
//!       direction: asc
//! ```

use crate::core::{Category, FieldKind, PortalError, RecordSchema, SortDirection, SortSpec};
use crate::entities::{
    CatalogRecord, Commendation, CommendationCategory, Loadout, Mission, Order, OrderStatus,
    OrderType, Terrain,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A category field and its allowed values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub field: String,
    pub values: Vec<String>,
}

/// A sortable column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortableConfig {
    pub field: String,
    pub kind: FieldKind,
}

/// Configuration of one list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDefinition {
    /// List page name (e.g., "orders")
    pub name: String,

    /// Record type shown on the page (e.g., "order")
    pub record_type: String,

    #[serde(default)]
    pub searchable: Vec<String>,

    #[serde(default)]
    pub categories: Vec<CategoryConfig>,

    #[serde(default)]
    pub sortable: Vec<SortableConfig>,

    /// Sort used when the query names none; `id` ascending if omitted
    #[serde(default)]
    pub default_sort: Option<SortSpec>,
}

impl ListDefinition {
    /// Build the schema this definition describes
    pub fn to_schema(&self) -> Result<RecordSchema, PortalError> {
        let mut builder = RecordSchema::builder(self.record_type.as_str());
        for field in &self.searchable {
            builder = builder.searchable(field);
        }
        for category in &self.categories {
            builder = builder.category_values(&category.field, category.values.iter().cloned());
        }
        for column in &self.sortable {
            builder = builder.sortable(&column.field, column.kind);
        }
        if let Some(sort) = &self.default_sort {
            builder = builder.default_sort(&sort.key, sort.direction);
        }

        builder.build().map_err(|err| {
            tracing::warn!(list = %self.name, error = %err, "invalid list definition");
            err.into()
        })
    }
}

/// Complete configuration for the portal's list pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsConfig {
    #[serde(default)]
    pub lists: Vec<ListDefinition>,
}

impl ListsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PortalError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PortalError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Merge several configurations into one
    ///
    /// Lists are keyed by name; a later definition replaces an earlier one
    /// in place, new names are appended.
    pub fn merge(configs: Vec<ListsConfig>) -> Self {
        let mut merged = ListsConfig::default();
        for config in configs {
            for list in config.lists {
                match merged.lists.iter_mut().find(|l| l.name == list.name) {
                    Some(existing) => {
                        tracing::debug!(list = %list.name, "list definition overridden");
                        *existing = list;
                    }
                    None => merged.lists.push(list),
                }
            }
        }
        merged
    }

    /// Find a list definition by name
    pub fn list(&self, name: &str) -> Option<&ListDefinition> {
        self.lists.iter().find(|l| l.name == name)
    }

    /// Schema of the named list
    pub fn schema(&self, name: &str) -> Result<RecordSchema, PortalError> {
        self.list(name)
            .ok_or_else(|| PortalError::UnknownList(name.to_string()))?
            .to_schema()
    }

    /// The portal's built-in orders, loadouts and commendations lists
    pub fn default_config() -> Self {
        Self {
            lists: vec![
                ListDefinition {
                    name: Order::list_name().to_string(),
                    record_type: "order".to_string(),
                    searchable: strings(&["item", "operator"]),
                    categories: vec![category::<OrderType>("type"), category::<OrderStatus>("status")],
                    sortable: vec![
                        sortable("type", FieldKind::Category),
                        sortable("item", FieldKind::Text),
                        sortable("quantity", FieldKind::Number),
                        sortable("price", FieldKind::Number),
                        sortable("status", FieldKind::Category),
                        sortable("date", FieldKind::Date),
                        sortable("operator", FieldKind::Text),
                    ],
                    default_sort: Some(SortSpec {
                        key: "date".to_string(),
                        direction: SortDirection::Descending,
                    }),
                },
                ListDefinition {
                    name: Loadout::list_name().to_string(),
                    record_type: "loadout".to_string(),
                    searchable: strings(&["name", "description"]),
                    categories: vec![category::<Terrain>("terrain"), category::<Mission>("mission")],
                    sortable: vec![
                        sortable("name", FieldKind::Text),
                        sortable("terrain", FieldKind::Category),
                        sortable("mission", FieldKind::Category),
                        sortable("item_count", FieldKind::Number),
                    ],
                    default_sort: None,
                },
                ListDefinition {
                    name: Commendation::list_name().to_string(),
                    record_type: "commendation".to_string(),
                    searchable: strings(&["name", "description"]),
                    categories: vec![category::<CommendationCategory>("category")],
                    sortable: vec![
                        sortable("name", FieldKind::Text),
                        sortable("date_earned", FieldKind::Date),
                    ],
                    default_sort: Some(SortSpec {
                        key: "date_earned".to_string(),
                        direction: SortDirection::Descending,
                    }),
                },
            ],
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn category<C: Category>(field: &str) -> CategoryConfig {
    CategoryConfig {
        field: field.to_string(),
        values: C::allowed_values(),
    }
}

fn sortable(field: &str, kind: FieldKind) -> SortableConfig {
    SortableConfig {
        field: field.to_string(),
        kind,
    }
}
