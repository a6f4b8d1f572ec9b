//! Query engine: validate, filter, sort

use crate::core::comparator::RecordComparator;
use crate::core::error::ConfigurationError;
use crate::core::predicate::RecordPredicate;
use crate::core::query::Query;
use crate::core::record::Record;
use crate::core::schema::RecordSchema;
use crate::core::view::ListView;
use std::sync::Arc;

/// A compiled query, ready to run against any number of record slices
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    pub predicate: RecordPredicate,
    pub comparator: RecordComparator,
}

/// Search / filter / sort engine for one record type
///
/// Holds only the schema, so it is cheap to clone and safe to share. Every
/// call is a pure function of `(records, query)`: the input slice is never
/// reordered or modified and the output is a filtered permutation of it.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    schema: Arc<RecordSchema>,
}

impl QueryEngine {
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Validate `query` and build its predicate and comparator
    pub fn compile(&self, query: &Query) -> Result<CompiledQuery, ConfigurationError> {
        let compiled = RecordPredicate::build(&self.schema, query)
            .and_then(|predicate| {
                RecordComparator::for_query(&self.schema, query)
                    .map(|comparator| CompiledQuery { predicate, comparator })
            })
            .inspect_err(|e| {
                tracing::warn!(
                    record_type = self.schema.record_type(),
                    code = e.error_code(),
                    "Rejected list query: {}",
                    e
                );
            })?;
        Ok(compiled)
    }

    /// Filter and sort `records` according to `query`
    ///
    /// The query is fully validated before any record is examined.
    pub fn run<'a, R: Record>(
        &self,
        records: &'a [R],
        query: &Query,
    ) -> Result<Vec<&'a R>, ConfigurationError> {
        let compiled = self.compile(query)?;
        Ok(Self::apply(&compiled, records))
    }

    /// Like [`run`](Self::run), wrapped with the unfiltered record count
    pub fn view<'a, R: Record>(
        &self,
        records: &'a [R],
        query: &Query,
    ) -> Result<ListView<'a, R>, ConfigurationError> {
        let rows = self.run(records, query)?;
        Ok(ListView::new(rows, records.len()))
    }

    fn apply<'a, R: Record>(compiled: &CompiledQuery, records: &'a [R]) -> Vec<&'a R> {
        let mut rows: Vec<&'a R> = records
            .iter()
            .filter(|record| compiled.predicate.matches(*record))
            .collect();
        rows.sort_by(|a, b| compiled.comparator.compare(*a, *b));

        tracing::debug!(
            record_type = R::record_type(),
            total = records.len(),
            matched = rows.len(),
            sort_key = compiled.comparator.key(),
            sort_direction = compiled.comparator.direction().as_str(),
            "List query evaluated"
        );
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldKind;
    use crate::core::query::SortDirection;
    use crate::core::record::DynamicRecord;

    fn engine() -> QueryEngine {
        let schema = RecordSchema::builder("commendation")
            .searchable("name")
            .searchable("description")
            .category_values("category", ["performance", "achievement", "service"])
            .sortable("date_earned", FieldKind::Date)
            .default_sort("date_earned", SortDirection::Descending)
            .build()
            .unwrap();
        QueryEngine::new(schema)
    }

    fn commendation(id: &str, name: &str, category: &str, date: &str) -> DynamicRecord {
        DynamicRecord::new(id)
            .with("name", name)
            .with("description", "")
            .with("category", category)
            .with("date_earned", date)
    }

    fn records() -> Vec<DynamicRecord> {
        vec![
            commendation("1", "Sharpshooter", "achievement", "2023-05-15"),
            commendation("2", "First Responder", "performance", "2023-06-22"),
            commendation("7", "Combat Medic", "service", "2023-11-15"),
        ]
    }

    fn ids(rows: &[&DynamicRecord]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_default_sort_newest_first() {
        let records = records();
        let rows = engine().run(&records, &Query::new()).unwrap();
        assert_eq!(ids(&rows), vec!["7", "2", "1"]);
    }

    #[test]
    fn test_input_is_left_untouched() {
        let records = records();
        let before = records.clone();
        let _ = engine().run(&records, &Query::new()).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn test_filter_and_search_combine() {
        let records = records();
        let query = Query::new().search("medic").filter("category", "service");
        let rows = engine().run(&records, &query).unwrap();
        assert_eq!(ids(&rows), vec!["7"]);

        let query = Query::new().search("medic").filter("category", "performance");
        assert!(engine().run(&records, &query).unwrap().is_empty());
    }

    #[test]
    fn test_view_reports_no_matches() {
        let records = records();
        let view = engine()
            .view(&records, &Query::new().search("nothing like this"))
            .unwrap();
        assert!(view.has_no_matches());
        assert_eq!(view.total_records(), 3);
    }

    #[test]
    fn test_compile_rejects_before_running() {
        let err = engine()
            .compile(&Query::new().sort_by("description"))
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_SORTABLE");
    }
}
