//! Record schemas: which fields a list page can search, filter and sort
//!
//! A [`RecordSchema`] is the field-descriptor configuration one
//! [`QueryEngine`](crate::core::engine::QueryEngine) is parameterized by. It is
//! built once per record type, at page-construction time, and all of its
//! consistency checks run in [`RecordSchemaBuilder::build`].
//!
//! # Example
//!
//! ```rust,ignore
//! let schema = RecordSchema::builder("loadout")
//!     .searchable("name")
//!     .searchable("description")
//!     .category::<Terrain>("terrain")
//!     .category::<Mission>("mission")
//!     .sortable("name", FieldKind::Text)
//!     .default_sort("id", SortDirection::Ascending)
//!     .build()?;
//! ```

use crate::core::category::Category;
use crate::core::error::ConfigurationError;
use crate::core::field::FieldKind;
use crate::core::query::{Query, SortDirection};
use crate::core::record::ID_FIELD;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Description of one field of a record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    pub searchable: bool,
    pub sortable: bool,
    /// Allowed values, only populated for category fields
    pub values: Vec<String>,
}

impl FieldDescriptor {
    fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            searchable: false,
            sortable: false,
            values: Vec::new(),
        }
    }

    pub fn is_category(&self) -> bool {
        self.kind == FieldKind::Category
    }

    /// Whether `value` belongs to this category field's enumeration
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// Sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// A sort resolved against a schema: key, its kind, and the direction to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSort {
    pub key: String,
    pub kind: FieldKind,
    pub direction: SortDirection,
}

/// Field descriptors of one record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    record_type: String,
    fields: IndexMap<String, FieldDescriptor>,
    default_sort: SortSpec,
}

impl RecordSchema {
    pub fn builder(record_type: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder::new(record_type)
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Names of the fields the search term is matched against
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .values()
            .filter(|f| f.searchable)
            .map(|f| f.name.as_str())
    }

    /// Category fields, in declaration order
    pub fn category_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values().filter(|f| f.is_category())
    }

    pub fn default_sort(&self) -> &SortSpec {
        &self.default_sort
    }

    /// Look up a category field, failing if `name` is not one
    pub fn category_field(&self, name: &str) -> Result<&FieldDescriptor, ConfigurationError> {
        self.fields
            .get(name)
            .filter(|f| f.is_category())
            .ok_or_else(|| ConfigurationError::UnknownCategoryField {
                record_type: self.record_type.clone(),
                field: name.to_string(),
            })
    }

    /// Kind of a sortable field; `id` is always sortable as text
    pub fn sort_kind(&self, key: &str) -> Result<FieldKind, ConfigurationError> {
        if key == ID_FIELD {
            return Ok(FieldKind::Text);
        }
        match self.fields.get(key) {
            Some(field) if field.sortable => Ok(field.kind),
            Some(_) => Err(ConfigurationError::NotSortable {
                record_type: self.record_type.clone(),
                key: key.to_string(),
            }),
            None => Err(ConfigurationError::UnknownSortKey {
                record_type: self.record_type.clone(),
                key: key.to_string(),
            }),
        }
    }

    /// Decide which sort a query runs with
    ///
    /// No key means the schema's default sort, direction included. An explicit
    /// key without a direction sorts dates newest first and everything else
    /// ascending.
    pub fn resolve_sort(&self, query: &Query) -> Result<ResolvedSort, ConfigurationError> {
        let (key, fallback) = match &query.sort_key {
            Some(key) => (key.as_str(), None),
            None => (
                self.default_sort.key.as_str(),
                Some(self.default_sort.direction),
            ),
        };
        let kind = self.sort_kind(key)?;
        let direction = query
            .sort_direction
            .or(fallback)
            .unwrap_or_else(|| SortDirection::default_for(kind));

        Ok(ResolvedSort {
            key: key.to_string(),
            kind,
            direction,
        })
    }

    /// Check that every field of this schema exists in `record` with the same kind
    ///
    /// Category values must also belong to the record's enumeration.
    pub fn conforms_to(&self, record: &RecordSchema) -> Result<(), ConfigurationError> {
        for field in self.fields.values() {
            if field.name == ID_FIELD {
                continue;
            }
            let Some(declared) = record.field(&field.name).filter(|d| d.kind == field.kind) else {
                return Err(self.missing_field(field));
            };
            if let Some(value) = field.values.iter().find(|v| !declared.allows(v)) {
                return Err(ConfigurationError::UnknownCategoryValue {
                    field: field.name.clone(),
                    value: value.clone(),
                    allowed: declared.values.clone(),
                });
            }
        }
        Ok(())
    }

    fn missing_field(&self, field: &FieldDescriptor) -> ConfigurationError {
        let record_type = self.record_type.clone();
        let name = field.name.clone();
        if field.is_category() {
            ConfigurationError::UnknownCategoryField { record_type, field: name }
        } else if field.sortable {
            ConfigurationError::UnknownSortKey { record_type, key: name }
        } else {
            ConfigurationError::UnknownSearchField { record_type, field: name }
        }
    }
}

/// Builder for [`RecordSchema`]
///
/// Declaration mistakes are remembered and reported by [`build`](Self::build),
/// so a chain of declarations reads top to bottom without `?` at every step.
#[derive(Debug)]
pub struct RecordSchemaBuilder {
    record_type: String,
    fields: IndexMap<String, FieldDescriptor>,
    default_sort: SortSpec,
    error: Option<ConfigurationError>,
}

impl RecordSchemaBuilder {
    fn new(record_type: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            fields: IndexMap::new(),
            default_sort: SortSpec {
                key: ID_FIELD.to_string(),
                direction: SortDirection::Ascending,
            },
            error: None,
        }
    }

    /// Declare a text field matched by the search term
    pub fn searchable(mut self, name: &str) -> Self {
        match self.fields.get_mut(name) {
            Some(field) if field.kind == FieldKind::Text => field.searchable = true,
            Some(_) => {
                let err = ConfigurationError::UnknownSearchField {
                    record_type: self.record_type.clone(),
                    field: name.to_string(),
                };
                self.fail(err);
            }
            None => {
                let mut field = FieldDescriptor::new(name, FieldKind::Text);
                field.searchable = true;
                self.fields.insert(name.to_string(), field);
            }
        }
        self
    }

    /// Declare a category field whose values come from `C`
    pub fn category<C: Category>(self, name: &str) -> Self {
        self.category_values(name, C::allowed_values())
    }

    /// Declare a category field with an explicit list of allowed values
    pub fn category_values<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.fields.contains_key(name) || name == ID_FIELD {
            self.duplicate(name);
            return self;
        }
        let mut field = FieldDescriptor::new(name, FieldKind::Category);
        field.values = values.into_iter().map(Into::into).collect();
        self.fields.insert(name.to_string(), field);
        self
    }

    /// Declare a field as sortable, adding it if it was not declared yet
    pub fn sortable(mut self, name: &str, kind: FieldKind) -> Self {
        if name == ID_FIELD {
            return self;
        }
        match self.fields.get_mut(name) {
            Some(field) if field.kind == kind => field.sortable = true,
            Some(_) => self.duplicate(name),
            None => {
                let mut field = FieldDescriptor::new(name, kind);
                field.sortable = true;
                self.fields.insert(name.to_string(), field);
            }
        }
        self
    }

    /// Sort applied when a query names no sort key
    pub fn default_sort(mut self, key: &str, direction: SortDirection) -> Self {
        self.default_sort = SortSpec {
            key: key.to_string(),
            direction,
        };
        self
    }

    pub fn build(self) -> Result<RecordSchema, ConfigurationError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.record_type.trim().is_empty() {
            return Err(ConfigurationError::EmptySchema);
        }

        let schema = RecordSchema {
            record_type: self.record_type,
            fields: self.fields,
            default_sort: self.default_sort,
        };
        schema.sort_kind(&schema.default_sort.key)?;
        Ok(schema)
    }

    fn duplicate(&mut self, name: &str) {
        let err = ConfigurationError::DuplicateField {
            record_type: self.record_type.clone(),
            field: name.to_string(),
        };
        self.fail(err);
    }

    fn fail(&mut self, err: ConfigurationError) {
        // First mistake wins; later ones are usually knock-on effects
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loadout_schema() -> RecordSchema {
        RecordSchema::builder("loadout")
            .searchable("name")
            .searchable("description")
            .category_values("terrain", ["urban", "desert", "jungle", "arctic"])
            .sortable("name", FieldKind::Text)
            .sortable("issued", FieldKind::Date)
            .build()
            .unwrap()
    }

    #[test]
    fn test_searchable_fields_in_declaration_order() {
        let schema = loadout_schema();
        assert_eq!(
            schema.searchable_fields().collect::<Vec<_>>(),
            vec!["name", "description"]
        );
    }

    #[test]
    fn test_searchable_field_can_also_be_sortable() {
        let schema = loadout_schema();
        let name = schema.field("name").unwrap();
        assert!(name.searchable);
        assert!(name.sortable);
        assert!(!schema.field("description").unwrap().sortable);
    }

    #[test]
    fn test_category_field_lookup() {
        let schema = loadout_schema();
        let terrain = schema.category_field("terrain").unwrap();
        assert!(terrain.allows("urban"));
        assert!(!terrain.allows("Urban"));

        let err = schema.category_field("name").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY_FIELD");
    }

    #[test]
    fn test_sort_kind() {
        let schema = loadout_schema();
        assert_eq!(schema.sort_kind("id"), Ok(FieldKind::Text));
        assert_eq!(schema.sort_kind("issued"), Ok(FieldKind::Date));
        assert!(matches!(
            schema.sort_kind("description"),
            Err(ConfigurationError::NotSortable { .. })
        ));
        assert!(matches!(
            schema.sort_kind("weight"),
            Err(ConfigurationError::UnknownSortKey { .. })
        ));
    }

    #[test]
    fn test_resolve_sort_defaults() {
        let schema = loadout_schema();

        let resolved = schema.resolve_sort(&Query::new()).unwrap();
        assert_eq!(resolved.key, "id");
        assert_eq!(resolved.direction, SortDirection::Ascending);

        let resolved = schema.resolve_sort(&Query::new().sort_by("issued")).unwrap();
        assert_eq!(resolved.kind, FieldKind::Date);
        assert_eq!(resolved.direction, SortDirection::Descending);

        let resolved = schema.resolve_sort(&Query::new().sort_by("name")).unwrap();
        assert_eq!(resolved.direction, SortDirection::Ascending);

        let resolved = schema
            .resolve_sort(&Query::new().sort("name", SortDirection::Descending))
            .unwrap();
        assert_eq!(resolved.direction, SortDirection::Descending);
    }

    #[test]
    fn test_default_sort_direction_is_kept() {
        let schema = RecordSchema::builder("commendation")
            .sortable("date_earned", FieldKind::Date)
            .default_sort("date_earned", SortDirection::Ascending)
            .build()
            .unwrap();
        let resolved = schema.resolve_sort(&Query::new()).unwrap();
        assert_eq!(resolved.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_default_sort_must_be_sortable() {
        let err = RecordSchema::builder("order")
            .searchable("item")
            .default_sort("item", SortDirection::Ascending)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::NotSortable { .. }));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let err = RecordSchema::builder("order")
            .category_values("status", ["pending"])
            .category_values("status", ["completed"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DuplicateField {
                record_type: "order".to_string(),
                field: "status".to_string(),
            }
        );
    }

    #[test]
    fn test_kind_conflict_rejected() {
        let err = RecordSchema::builder("order")
            .sortable("price", FieldKind::Number)
            .sortable("price", FieldKind::Text)
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_FIELD");
    }

    #[test]
    fn test_search_on_number_rejected() {
        let err = RecordSchema::builder("order")
            .sortable("quantity", FieldKind::Number)
            .searchable("quantity")
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SEARCH_FIELD");
    }

    #[test]
    fn test_conforms_to_record_fields() {
        let record = loadout_schema();

        let narrower = RecordSchema::builder("loadout")
            .searchable("description")
            .category_values("terrain", ["urban", "arctic"])
            .sortable("issued", FieldKind::Date)
            .build()
            .unwrap();
        assert!(narrower.conforms_to(&record).is_ok());

        let unknown_category = RecordSchema::builder("loadout")
            .category_values("colour", ["red", "blue"])
            .build()
            .unwrap();
        assert_eq!(
            unknown_category.conforms_to(&record).unwrap_err().error_code(),
            "UNKNOWN_CATEGORY_FIELD"
        );

        let wrong_kind = RecordSchema::builder("loadout")
            .sortable("name", FieldKind::Number)
            .build()
            .unwrap();
        assert_eq!(
            wrong_kind.conforms_to(&record).unwrap_err().error_code(),
            "UNKNOWN_SORT_KEY"
        );

        let extra_value = RecordSchema::builder("loadout")
            .category_values("terrain", ["urban", "swamp"])
            .build()
            .unwrap();
        assert_eq!(
            extra_value.conforms_to(&record).unwrap_err().error_code(),
            "UNKNOWN_CATEGORY_VALUE"
        );

        let unknown_search = RecordSchema::builder("loadout")
            .searchable("callsign")
            .build()
            .unwrap();
        assert_eq!(
            unknown_search.conforms_to(&record).unwrap_err().error_code(),
            "UNKNOWN_SEARCH_FIELD"
        );
    }

    #[test]
    fn test_empty_record_type_rejected() {
        assert_eq!(
            RecordSchema::builder("  ").build().unwrap_err(),
            ConfigurationError::EmptySchema
        );
    }
}
