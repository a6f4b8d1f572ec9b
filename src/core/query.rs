//! Query parameters, sort directions and pagination utilities

use crate::core::error::ConfigurationError;
use crate::core::field::FieldKind;
use crate::core::schema::RecordSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Filter value meaning "no filtering on this field"
pub const ALL: &str = "all";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Direction used when a sort key is chosen without one:
    /// dates newest first, everything else ascending
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Date => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Parse `asc` / `desc` (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Selected value of one category filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No filtering on this field
    #[default]
    All,
    /// Keep only records whose value equals this exactly
    Only(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Only(value) => value,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(value)
    }
}

/// Search, filter and sort configuration driving one list view
///
/// A `Query` is transient UI state: rebuilt on every keystroke, filter click
/// or sort-header click. The default query matches everything and uses the
/// schema's default sort.
///
/// # Example
/// ```rust,ignore
/// let query = Query::new()
///     .search("recon")
///     .filter("terrain", "desert")
///     .sort("name", SortDirection::Ascending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Case-insensitive substring matched against searchable fields
    pub search_term: String,

    /// Category field name to selected value; absent fields are `All`
    pub category_filters: BTreeMap<String, CategoryFilter>,

    /// Sort column; `None` uses the schema default
    pub sort_key: Option<String>,

    /// Sort direction; `None` uses the default for the column
    pub sort_direction: Option<SortDirection>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<CategoryFilter>) -> Self {
        self.category_filters.insert(field.into(), value.into());
        self
    }

    /// Sort by `key` with the column's default direction
    pub fn sort_by(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self.sort_direction = None;
        self
    }

    pub fn sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_key = Some(key.into());
        self.sort_direction = Some(direction);
        self
    }

    /// Whether this query keeps every record
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category_filters.values().all(CategoryFilter::is_all)
    }

    /// Apply a sort-header click
    ///
    /// Clicking the column currently sorted on flips its direction; clicking
    /// any other column sorts on it ascending.
    pub fn toggle_sort(&mut self, column: &str, schema: &RecordSchema) {
        match schema.resolve_sort(self) {
            Ok(current) if current.key == column => {
                self.sort_key = Some(current.key);
                self.sort_direction = Some(current.direction.reversed());
            }
            _ => {
                self.sort_key = Some(column.to_string());
                self.sort_direction = Some(SortDirection::Ascending);
            }
        }
    }
}

/// Query parameters for search, filtering, sorting and pagination
///
/// This structure mirrors what a list page receives from its URL query string
/// or UI state. All parameters have sensible defaults.
///
/// # Example
/// ```rust,ignore
/// // Usage:
/// GET /loadouts?search=recon
/// GET /loadouts?filter={"terrain": "urban", "mission": "all"}
/// GET /orders?page=1&limit=20&filter={"type": "incoming"}&sort=date:desc
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Search term
    pub search: Option<String>,

    /// Category filters as JSON object
    ///
    /// # Format
    /// `{"field": "value"}`, where `"all"` disables the filter on that field
    ///
    /// # Example
    /// ```text
    /// filter={"type": "incoming", "status": "all"}
    /// ```
    pub filter: Option<String>,

    /// Sort field and direction
    ///
    /// # Format
    /// - `field:asc` or `field:desc`
    /// - `field` (default direction for the field)
    ///
    /// # Example
    /// ```text
    /// sort=price:desc
    /// sort=date
    /// ```
    pub sort: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
            filter: None,
            sort: None,
        }
    }
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100) // Maximum 100 per page, minimum 1
    }

    /// Convert into a [`Query`]
    ///
    /// Malformed filter or sort expressions are configuration errors rather
    /// than silently ignored.
    pub fn to_query(&self) -> Result<Query, ConfigurationError> {
        let mut query = Query::new();

        if let Some(search) = &self.search {
            query.search_term = search.clone();
        }

        if let Some(raw) = self.filter.as_deref().filter(|s| !s.trim().is_empty()) {
            query.category_filters = parse_filter(raw)?;
        }

        if let Some(raw) = self.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            let (key, direction) = parse_sort(raw)?;
            query.sort_key = Some(key);
            query.sort_direction = direction;
        }

        Ok(query)
    }
}

fn parse_filter(raw: &str) -> Result<BTreeMap<String, CategoryFilter>, ConfigurationError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ConfigurationError::InvalidFilterExpression {
            reason: e.to_string(),
        })?;
    let Some(obj) = value.as_object() else {
        return Err(ConfigurationError::InvalidFilterExpression {
            reason: "expected a JSON object of field to value".to_string(),
        });
    };

    obj.iter()
        .map(|(field, value)| match value.as_str() {
            Some(s) => Ok((field.clone(), CategoryFilter::parse(s))),
            None => Err(ConfigurationError::InvalidFilterExpression {
                reason: format!("value for '{}' must be a string, got {}", field, value),
            }),
        })
        .collect()
}

fn parse_sort(raw: &str) -> Result<(String, Option<SortDirection>), ConfigurationError> {
    let invalid = |reason: &str| ConfigurationError::InvalidSortExpression {
        expression: raw.to_string(),
        reason: reason.to_string(),
    };

    let (key, direction) = match raw.split_once(':') {
        Some((key, dir)) => {
            let direction = SortDirection::parse(dir.trim())
                .ok_or_else(|| invalid("direction must be 'asc' or 'desc'"))?;
            (key.trim(), Some(direction))
        }
        None => (raw.trim(), None),
    };

    if key.is_empty() {
        return Err(invalid("missing field name"));
    }
    Ok((key.to_string(), direction))
}

/// Paginated response structure
///
/// This structure wraps paginated data with metadata about pagination state.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit and page are at least 1 to avoid division by zero and underflow
        let limit = limit.max(1);
        let page = page.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        // Page numbers come from request parameters and may be arbitrarily large
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.limit)
    }
}
