//! Page partitioning.

use std::num::NonZeroUsize;

use log::debug;

use crate::error::TableError;
use crate::model::Record;

/// One page of records, at most `page_size` long.
pub type Page = Vec<Record>;

/// An ordered, never-empty sequence of pages.
///
/// An empty dataset partitions into a single empty page so hosts always have
/// a page to display.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSet {
    pages: Vec<Page>,
    page_size: usize,
}

impl PageSet {
    /// Number of pages. Always at least 1.
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// The page size this set was built with.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the last page.
    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    /// Clamps a page index into `[0, total_pages - 1]`.
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Returns the page at `index`, if in range.
    pub fn page(&self, index: usize) -> Option<&[Record]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    pub(crate) fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    /// Total number of records across all pages.
    pub fn record_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Iterates the pages in order.
    pub fn iter(&self) -> impl Iterator<Item = &[Record]> {
        self.pages.iter().map(Vec::as_slice)
    }
}

/// Splits records into consecutive pages of `page_size`.
///
/// The last page may be shorter. Fails if `page_size` is zero.
pub fn partition(records: &[Record], page_size: usize) -> Result<PageSet, TableError> {
    let size = NonZeroUsize::new(page_size).ok_or(TableError::InvalidPageSize { size: page_size })?;
    Ok(partition_by(records, size))
}

/// Splits records into pages of a size already known to be valid.
pub fn partition_by(records: &[Record], page_size: NonZeroUsize) -> PageSet {
    let page_size = page_size.get();
    let mut pages: Vec<Page> = records
        .chunks(page_size)
        .map(<[Record]>::to_vec)
        .collect();
    if pages.is_empty() {
        pages.push(Page::new());
    }

    debug!(
        "Partitioned {} records into {} pages of {}",
        records.len(),
        pages.len(),
        page_size
    );

    PageSet { pages, page_size }
}
