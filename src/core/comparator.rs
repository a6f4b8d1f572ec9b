//! Comparator builder: natural order on one field, ties broken by id

use crate::core::error::ConfigurationError;
use crate::core::field::{FieldKind, SortKey};
use crate::core::query::{Query, SortDirection};
use crate::core::record::Record;
use crate::core::schema::RecordSchema;
use std::cmp::Ordering;

/// Total order over records for one sort key and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordComparator {
    key: String,
    kind: FieldKind,
    direction: SortDirection,
}

impl RecordComparator {
    /// Build a comparator for `key`, which must be sortable in `schema`
    pub fn build(
        schema: &RecordSchema,
        key: &str,
        direction: SortDirection,
    ) -> Result<Self, ConfigurationError> {
        let kind = schema.sort_kind(key)?;
        Ok(Self {
            key: key.to_string(),
            kind,
            direction,
        })
    }

    /// Build the comparator a query sorts with, applying schema defaults
    pub fn for_query(schema: &RecordSchema, query: &Query) -> Result<Self, ConfigurationError> {
        let resolved = schema.resolve_sort(query)?;
        Ok(Self {
            key: resolved.key,
            kind: resolved.kind,
            direction: resolved.direction,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compare two records
    ///
    /// The field's natural order is reversed for descending sorts; records
    /// without a value sort first in ascending order. Equal keys fall back to
    /// `id` ascending in both directions.
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let base = self.sort_key(a).cmp(&self.sort_key(b));
        let directed = match self.direction {
            SortDirection::Ascending => base,
            SortDirection::Descending => base.reverse(),
        };
        directed.then_with(|| a.id().cmp(b.id()))
    }

    fn sort_key<R: Record>(&self, record: &R) -> Option<SortKey> {
        record
            .value_of(&self.key)
            .and_then(|value| value.sort_key(self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::DynamicRecord;

    fn schema() -> RecordSchema {
        RecordSchema::builder("order")
            .searchable("item")
            .sortable("item", FieldKind::Text)
            .sortable("price", FieldKind::Number)
            .sortable("date", FieldKind::Date)
            .build()
            .unwrap()
    }

    fn order(id: &str, item: &str, price: f64, date: &str) -> DynamicRecord {
        DynamicRecord::new(id)
            .with("item", item)
            .with("price", price)
            .with("date", date)
    }

    #[test]
    fn test_numeric_order() {
        let cmp = RecordComparator::build(&schema(), "price", SortDirection::Ascending).unwrap();
        let cheap = order("1", "Gloves", 89.97, "2023-07-22");
        let pricey = order("2", "Goggles", 599.99, "2023-07-18");
        assert_eq!(cmp.compare(&cheap, &pricey), Ordering::Less);
        assert_eq!(cmp.compare(&pricey, &cheap), Ordering::Greater);
    }

    #[test]
    fn test_descending_reverses() {
        let cmp = RecordComparator::build(&schema(), "date", SortDirection::Descending).unwrap();
        let older = order("1", "Vest", 199.99, "2023-07-15");
        let newer = order("2", "Boots", 149.99, "2023-07-20");
        assert_eq!(cmp.compare(&newer, &older), Ordering::Less);
    }

    #[test]
    fn test_ties_break_on_id_ascending_in_both_directions() {
        let a = order("a", "Vest", 10.0, "2023-07-15");
        let b = order("b", "Vest", 10.0, "2023-07-15");
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let cmp = RecordComparator::build(&schema(), "item", direction).unwrap();
            assert_eq!(cmp.compare(&a, &b), Ordering::Less);
            assert_eq!(cmp.compare(&b, &a), Ordering::Greater);
        }
    }

    #[test]
    fn test_irreflexive() {
        let cmp = RecordComparator::build(&schema(), "price", SortDirection::Descending).unwrap();
        let a = order("1", "Vest", 10.0, "2023-07-15");
        assert_eq!(cmp.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_missing_values_sort_first_ascending() {
        let cmp = RecordComparator::build(&schema(), "price", SortDirection::Ascending).unwrap();
        let unpriced = DynamicRecord::new("9").with("item", "Scope");
        let priced = order("1", "Vest", 10.0, "2023-07-15");
        assert_eq!(cmp.compare(&unpriced, &priced), Ordering::Less);
    }

    #[test]
    fn test_missing_values_sort_last_descending() {
        let cmp = RecordComparator::build(&schema(), "price", SortDirection::Descending).unwrap();
        let unpriced = DynamicRecord::new("0").with("item", "Scope");
        let priced = order("1", "Vest", 10.0, "2023-07-15");
        assert_eq!(cmp.compare(&unpriced, &priced), Ordering::Greater);
        assert_eq!(cmp.compare(&priced, &unpriced), Ordering::Less);
    }

    #[test]
    fn test_sort_on_id() {
        let cmp = RecordComparator::build(&schema(), "id", SortDirection::Descending).unwrap();
        let one = DynamicRecord::new("1");
        let two = DynamicRecord::new("2");
        assert_eq!(cmp.compare(&two, &one), Ordering::Less);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RecordComparator::build(&schema(), "weight", SortDirection::Ascending)
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SORT_KEY");
    }

    #[test]
    fn test_for_query_uses_schema_default() {
        let cmp = RecordComparator::for_query(&schema(), &Query::new()).unwrap();
        assert_eq!(cmp.key(), "id");
        assert_eq!(cmp.direction(), SortDirection::Ascending);
    }
}
