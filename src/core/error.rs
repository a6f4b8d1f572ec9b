//! Typed error handling for the portal list engine
//!
//! Two categories exist:
//!
//! - [`ConfigurationError`]: a schema or query refers to something the record
//!   type does not have. Raised synchronously before any record is examined,
//!   and never partially applied. These are developer-facing defects (a page
//!   and its schema disagree), so they are surfaced rather than defaulted.
//! - [`PortalError`]: everything that can fail while assembling a list page,
//!   which adds record-source and configuration-file failures on top.
//!
//! A well-formed query that matches nothing is *not* an error; see
//! [`ListView::has_no_matches`](crate::core::view::ListView::has_no_matches).
//!
//! # Example
//!
//! ```rust,ignore
//! match engine.run(&records, &query) {
//!     Ok(rows) if rows.is_empty() => render_no_results(),
//!     Ok(rows) => render(rows),
//!     Err(ConfigurationError::UnknownCategoryField { field, .. }) => {
//!         report_bug(format!("page filters on missing field {field}"))
//!     }
//!     Err(e) => report_bug(e.to_string()),
//! }
//! ```

use thiserror::Error;

/// A schema or query references fields or values the record type does not define
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Category filter on a field that is not a category field of the schema
    #[error("'{record_type}' has no category field '{field}'")]
    UnknownCategoryField { record_type: String, field: String },

    /// Category filter value outside the field's enumeration
    #[error("'{value}' is not a valid value for '{field}' (expected one of: {})", .allowed.join(", "))]
    UnknownCategoryValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Sort key that is not a field of the schema
    #[error("'{record_type}' has no field '{key}' to sort by")]
    UnknownSortKey { record_type: String, key: String },

    /// Sort key that exists but is not declared sortable
    #[error("field '{key}' of '{record_type}' is not sortable")]
    NotSortable { record_type: String, key: String },

    /// Searchable field declared on a non-text field
    #[error("field '{field}' of '{record_type}' cannot be searched as text")]
    UnknownSearchField { record_type: String, field: String },

    /// The same field declared twice in a schema
    #[error("field '{field}' is declared more than once in '{record_type}'")]
    DuplicateField { record_type: String, field: String },

    /// Malformed `field:direction` sort expression
    #[error("invalid sort expression '{expression}': {reason}")]
    InvalidSortExpression { expression: String, reason: String },

    /// Malformed category filter expression
    #[error("invalid filter expression: {reason}")]
    InvalidFilterExpression { reason: String },

    /// Schema without a record type name
    #[error("record schema needs a non-empty record type name")]
    EmptySchema,
}

impl ConfigurationError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigurationError::UnknownCategoryField { .. } => "UNKNOWN_CATEGORY_FIELD",
            ConfigurationError::UnknownCategoryValue { .. } => "UNKNOWN_CATEGORY_VALUE",
            ConfigurationError::UnknownSortKey { .. } => "UNKNOWN_SORT_KEY",
            ConfigurationError::NotSortable { .. } => "NOT_SORTABLE",
            ConfigurationError::UnknownSearchField { .. } => "UNKNOWN_SEARCH_FIELD",
            ConfigurationError::DuplicateField { .. } => "DUPLICATE_FIELD",
            ConfigurationError::InvalidSortExpression { .. } => "INVALID_SORT_EXPRESSION",
            ConfigurationError::InvalidFilterExpression { .. } => "INVALID_FILTER_EXPRESSION",
            ConfigurationError::EmptySchema => "EMPTY_SCHEMA",
        }
    }
}

/// Errors raised while loading and serving list pages
#[derive(Debug, Error)]
pub enum PortalError {
    /// Query or schema configuration defect
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The injected record source failed to deliver records
    #[error("failed to load {list} records: {source}")]
    Source {
        list: String,
        #[source]
        source: anyhow::Error,
    },

    /// A list definition requested from configuration does not exist
    #[error("no list named '{0}' is configured")]
    UnknownList(String),

    /// List configuration file could not be read
    #[error("failed to read list configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// List configuration file is not valid YAML
    #[error("failed to parse list configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl PortalError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalError::Configuration(e) => e.error_code(),
            PortalError::Source { .. } => "SOURCE_ERROR",
            PortalError::UnknownList(_) => "UNKNOWN_LIST",
            PortalError::ConfigIo(_) => "CONFIG_IO_ERROR",
            PortalError::ConfigParse(_) => "CONFIG_PARSE_ERROR",
        }
    }

    /// Whether this error is a developer-facing configuration defect
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PortalError::Configuration(_)
                | PortalError::UnknownList(_)
                | PortalError::ConfigParse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_value_lists_allowed_values() {
        let err = ConfigurationError::UnknownCategoryValue {
            field: "terrain".to_string(),
            value: "swamp".to_string(),
            allowed: vec!["urban".to_string(), "desert".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "'swamp' is not a valid value for 'terrain' (expected one of: urban, desert)"
        );
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY_VALUE");
    }

    #[test]
    fn test_configuration_error_converts_transparently() {
        let err: PortalError = ConfigurationError::UnknownSortKey {
            record_type: "order".to_string(),
            key: "colour".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "'order' has no field 'colour' to sort by");
        assert_eq!(err.error_code(), "UNKNOWN_SORT_KEY");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_source_error_keeps_cause() {
        let err = PortalError::Source {
            list: "orders".to_string(),
            source: anyhow::anyhow!("connection refused"),
        };
        assert_eq!(err.error_code(), "SOURCE_ERROR");
        assert!(!err.is_configuration());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(
            err.to_string(),
            "failed to load orders records: connection refused"
        );
    }
}
