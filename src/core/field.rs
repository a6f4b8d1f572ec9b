//! Field value types and natural ordering

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Calendar date format used by the portal backend rows (`2023-07-15`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a number, widening integers and parsing numeric strings
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Get the value as a point in time
    ///
    /// Calendar dates are taken at midnight. Strings are accepted in
    /// `YYYY-MM-DD` or RFC 3339 form, which is how backend rows carry them.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(d) => d.and_hms_opt(0, 0, 0),
            FieldValue::DateTime(dt) => Some(dt.naive_utc()),
            FieldValue::String(s) => parse_date_string(s),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Project this value onto the natural order of `kind`
    ///
    /// Returns `None` when the value has no meaning for that kind (null, or a
    /// string that does not parse as a number/date).
    pub fn sort_key(&self, kind: FieldKind) -> Option<SortKey> {
        match kind {
            FieldKind::Text | FieldKind::Category => match self {
                FieldValue::String(s) => Some(SortKey::Text(s.clone())),
                FieldValue::Integer(i) => Some(SortKey::Text(i.to_string())),
                FieldValue::Boolean(b) => Some(SortKey::Text(b.to_string())),
                _ => None,
            },
            FieldKind::Number => self.as_number().map(SortKey::Number),
            FieldKind::Date => self.as_datetime().map(SortKey::Date),
        }
    }
}

fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

/// Semantic type of a field, which decides its natural order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text, ordered lexically
    Text,
    /// Integer or decimal, ordered numerically
    Number,
    /// Calendar date or timestamp, ordered chronologically
    Date,
    /// Value from a closed enumeration, ordered lexically
    Category,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Category => "category",
        }
    }
}

/// A value projected onto its natural order
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            // Only reachable when one field mixes kinds; keeps the order total
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
