//! Snapshots handed to renderers.

use serde::Serialize;

use crate::model::Record;

/// Derived pagination figures for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSummary {
    /// 1-based number of the current page.
    pub current_page_number: usize,
    /// Number of pages; at least 1.
    pub total_pages: usize,
    /// Index of the previous page, saturating at 0.
    pub prev_page_index: usize,
    /// Index of the next page, saturating at the last page.
    pub next_page_index: usize,
    /// Always 0.
    pub first_page_index: usize,
    /// Index of the last page.
    pub last_page_index: usize,
}

impl PaginationSummary {
    /// Computes the summary for a cursor position.
    ///
    /// `total_pages` is treated as at least 1 and `current_index` is clamped.
    pub fn new(current_index: usize, total_pages: usize) -> Self {
        let last = total_pages.max(1) - 1;
        let current = current_index.min(last);
        Self {
            current_page_number: current + 1,
            total_pages: last + 1,
            prev_page_index: current.saturating_sub(1),
            next_page_index: (current + 1).min(last),
            first_page_index: 0,
            last_page_index: last,
        }
    }

    /// Zero-based index of the current page.
    pub fn current_page_index(&self) -> usize {
        self.current_page_number - 1
    }

    /// Returns `true` if a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page_index() > 0
    }

    /// Returns `true` if a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page_index() < self.last_page_index
    }
}

/// What a renderer draws: the visible rows and the pagination footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    /// Rows to draw, already sorted or filtered.
    pub rows: Vec<Record>,
    /// Footer figures.
    pub summary: PaginationSummary,
    /// Selected page size.
    pub page_size: usize,
    /// Active search query, if the rows are a search result.
    pub query: Option<String>,
}

impl TableView {
    /// Returns `true` if the renderer should show the empty-state row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_middle_page() {
        let summary = PaginationSummary::new(1, 3);
        assert_eq!(
            summary,
            PaginationSummary {
                current_page_number: 2,
                total_pages: 3,
                prev_page_index: 0,
                next_page_index: 2,
                first_page_index: 0,
                last_page_index: 2,
            }
        );
        assert!(summary.has_prev());
        assert!(summary.has_next());
    }

    #[test]
    fn test_summary_edges_saturate() {
        let first = PaginationSummary::new(0, 3);
        assert_eq!(first.prev_page_index, 0);
        assert!(!first.has_prev());

        let last = PaginationSummary::new(2, 3);
        assert_eq!(last.next_page_index, 2);
        assert!(!last.has_next());
    }

    #[test]
    fn test_summary_single_page() {
        let summary = PaginationSummary::new(0, 1);
        assert_eq!(summary.current_page_number, 1);
        assert_eq!(summary.total_pages, 1);
        assert_eq!(summary.prev_page_index, 0);
        assert_eq!(summary.next_page_index, 0);
        assert_eq!(summary.last_page_index, 0);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_value(PaginationSummary::new(0, 2)).unwrap();
        assert_eq!(json["currentPageNumber"], 1);
        assert_eq!(json["nextPageIndex"], 1);
    }
}
