//! Result of running a query, as handed to the rendering layer

use crate::core::query::{PaginatedResponse, PaginationMeta};

/// Filtered and sorted rows of one list page
///
/// Rows borrow from the record store; nothing is copied until a page is
/// materialised with [`paginate`](Self::paginate).
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a, R> {
    rows: Vec<&'a R>,
    total_records: usize,
}

impl<'a, R> ListView<'a, R> {
    pub fn new(rows: Vec<&'a R>, total_records: usize) -> Self {
        Self {
            rows,
            total_records,
        }
    }

    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<&'a R> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of records before filtering
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// The query was valid but nothing matched ("no records match")
    ///
    /// Distinct from an empty store, where the page has nothing to filter.
    pub fn has_no_matches(&self) -> bool {
        self.rows.is_empty() && self.total_records > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.rows.iter().copied()
    }

    /// Slice one page out of the view
    pub fn paginate(&self, page: usize, limit: usize) -> PaginatedResponse<R>
    where
        R: Clone,
    {
        let pagination = PaginationMeta::new(page, limit, self.rows.len());
        let data = self
            .rows
            .iter()
            .skip(pagination.offset())
            .take(pagination.limit)
            .map(|r| (*r).clone())
            .collect();

        PaginatedResponse { data, pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_vs_empty_store() {
        let empty_store: ListView<'_, u32> = ListView::new(vec![], 0);
        assert!(empty_store.is_empty());
        assert!(!empty_store.has_no_matches());

        let filtered_out: ListView<'_, u32> = ListView::new(vec![], 5);
        assert!(filtered_out.has_no_matches());
    }

    #[test]
    fn test_paginate() {
        let values: Vec<u32> = (1..=5).collect();
        let view = ListView::new(values.iter().collect(), values.len());

        let page = view.paginate(2, 2);
        assert_eq!(page.data, vec![3, 4]);
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_prev);

        let last = view.paginate(3, 2);
        assert_eq!(last.data, vec![5]);
        assert!(!last.pagination.has_next);

        let beyond = view.paginate(9, 2);
        assert!(beyond.data.is_empty());
    }
}
