//! Closed enumerations for category fields

use crate::core::error::ConfigurationError;

/// A value drawn from a small fixed enumeration
///
/// Category fields (order type, loadout terrain, commendation category) are
/// filtered by exact match. Implementations are normally generated with
/// [`define_category!`](crate::define_category), which keeps the enum, its
/// wire names and [`Category::VALUES`] in one place.
pub trait Category: Copy + Eq + Send + Sync + 'static {
    /// Every wire name of the enumeration, in declaration order
    const VALUES: &'static [&'static str];

    /// Wire name of this value (e.g. `"in-progress"`)
    fn as_str(&self) -> &'static str;

    /// Look up a value by its exact wire name
    fn from_name(name: &str) -> Option<Self>;

    /// All wire names as owned strings, for schema construction and errors
    fn allowed_values() -> Vec<String> {
        Self::VALUES.iter().map(|v| v.to_string()).collect()
    }

    /// Parse a wire name for `field`, rejecting anything outside the enumeration
    fn parse_for(field: &str, name: &str) -> Result<Self, ConfigurationError> {
        Self::from_name(name).ok_or_else(|| ConfigurationError::UnknownCategoryValue {
            field: field.to_string(),
            value: name.to_string(),
            allowed: Self::allowed_values(),
        })
    }
}
