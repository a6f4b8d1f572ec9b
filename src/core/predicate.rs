//! Predicate builder: search term AND category filters

use crate::core::error::ConfigurationError;
use crate::core::query::{CategoryFilter, Query};
use crate::core::record::Record;
use crate::core::schema::RecordSchema;

/// Compiled inclusion test for one query
///
/// Built once per query; construction performs every check that can fail, so
/// [`matches`](Self::matches) itself is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPredicate {
    /// Lowercased search term; empty matches everything
    needle: String,
    search_fields: Vec<String>,
    /// (field, required value) for every filter that is not `All`
    categories: Vec<(String, String)>,
}

impl RecordPredicate {
    /// Compile the search and category part of `query` against `schema`
    ///
    /// Fails if a filter names a field that is not a category field of the
    /// schema, or a value outside that field's enumeration. `All` filters are
    /// checked too: a page filtering on a missing field is a defect even
    /// while the filter is switched off.
    pub fn build(schema: &RecordSchema, query: &Query) -> Result<Self, ConfigurationError> {
        let mut categories = Vec::new();
        for (field, filter) in &query.category_filters {
            let descriptor = schema.category_field(field)?;
            if let CategoryFilter::Only(value) = filter {
                if !descriptor.allows(value) {
                    return Err(ConfigurationError::UnknownCategoryValue {
                        field: field.clone(),
                        value: value.clone(),
                        allowed: descriptor.values.clone(),
                    });
                }
                categories.push((field.clone(), value.clone()));
            }
        }

        Ok(Self {
            needle: query.search_term.to_lowercase(),
            search_fields: schema.searchable_fields().map(str::to_string).collect(),
            categories,
        })
    }

    /// Logical AND of the text predicate and every category predicate
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_categories(record) && self.matches_text(record)
    }

    /// True when the term is empty or any searchable field contains it,
    /// ignoring case
    pub fn matches_text<R: Record>(&self, record: &R) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.search_fields.iter().any(|field| {
            record
                .value_of(field)
                .and_then(|v| v.as_string().map(|s| s.to_lowercase().contains(&self.needle)))
                .unwrap_or(false)
        })
    }

    /// True when every active category filter equals the record's value exactly
    pub fn matches_categories<R: Record>(&self, record: &R) -> bool {
        self.categories.iter().all(|(field, expected)| {
            record
                .field_value(field)
                .is_some_and(|v| v.as_string() == Some(expected.as_str()))
        })
    }

    /// Whether this predicate keeps every record
    pub fn is_trivial(&self) -> bool {
        self.needle.is_empty() && self.categories.is_empty()
    }
}
