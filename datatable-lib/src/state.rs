//! Table state: cursor, sort and page size over a dataset.

use std::fmt;
use std::num::NonZeroUsize;

use log::debug;

use crate::compare::SortState;
use crate::compare::sort_records;
use crate::error::TableError;
use crate::events::TableObserver;
use crate::filter::SearchMode;
use crate::filter::search_with;
use crate::model::Record;
use crate::options::TableOptions;
use crate::options::validate_page_sizes;
use crate::paginate::PageSet;
use crate::paginate::partition_by;
use crate::view::PaginationSummary;
use crate::view::TableView;

/// Pagination, sort and search state for one table.
///
/// Sorting and searching act on the current page only, not on the whole
/// dataset. Changing the page size or reloading rebuilds the pages from the
/// dataset in its original order.
///
/// # Example
///
/// ```
/// use datatable_lib::TableState;
/// use datatable_lib::model::Record;
///
/// let dataset: Vec<Record> = (0..7).map(|i| Record::new().set("id", i as i64)).collect();
/// let mut table = TableState::initialize(dataset, ["id"], [3], 3).unwrap();
///
/// assert_eq!(table.total_pages(), 3);
/// table.go_to_page(5);
/// assert_eq!(table.current_page_index(), 2);
/// assert_eq!(table.visible_rows().len(), 1);
/// ```
pub struct TableState {
    /// Full dataset in load order.
    pub(crate) dataset: Vec<Record>,
    /// Fields shown as columns.
    pub(crate) keys: Vec<String>,
    /// Fields searched.
    pub(crate) search_keys: Vec<String>,
    pub(crate) search_mode: SearchMode,
    /// Configured page-size choices.
    pub(crate) page_sizes: Vec<usize>,
    pub(crate) page_size: NonZeroUsize,
    pub(crate) pages: PageSet,
    /// Invariant: `current < pages.total_pages()`.
    pub(crate) current: usize,
    pub(crate) sort: SortState,
    /// Active search query shown by [`TableState::view`].
    pub(crate) query: Option<String>,
    pub(crate) observers: Vec<Box<dyn TableObserver>>,
}

impl TableState {
    /// Creates a table over `dataset`.
    ///
    /// Fails if `page_sizes` is empty, contains 0, or does not contain
    /// `initial_page_size`.
    pub fn initialize<S: Into<String>>(
        dataset: Vec<Record>,
        keys: impl IntoIterator<Item = S>,
        page_sizes: impl IntoIterator<Item = usize>,
        initial_page_size: usize,
    ) -> Result<Self, TableError> {
        let page_sizes: Vec<usize> = page_sizes.into_iter().collect();
        validate_page_sizes(&page_sizes)?;
        let page_size = checked_page_size(initial_page_size, &page_sizes)?;
        let pages = partition_by(&dataset, page_size);

        debug!(
            "Table initialized: {} records, page size {}, {} pages",
            dataset.len(),
            page_size,
            pages.total_pages()
        );

        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        Ok(Self {
            dataset,
            search_keys: keys.clone(),
            keys,
            search_mode: SearchMode::default(),
            page_sizes,
            page_size,
            pages,
            current: 0,
            sort: SortState::default(),
            query: None,
            observers: Vec::new(),
        })
    }

    /// Creates a table from validated options, starting at the first page size.
    pub fn from_options(dataset: Vec<Record>, options: &TableOptions) -> Result<Self, TableError> {
        options.validate()?;
        let initial = options.default_page_size().ok_or(TableError::EmptyPageSizes)?;
        let mut table = Self::initialize(
            dataset,
            options.display_keys.iter().cloned(),
            options.page_sizes.iter().copied(),
            initial,
        )?;
        table.search_keys = options.search_keys().to_vec();
        table.search_mode = options.search_mode;
        Ok(table)
    }

    /// Searches the given keys instead of the display keys.
    pub fn with_search_keys<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.search_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replaces the dataset and returns to the first page.
    ///
    /// The page size and sort state are kept.
    pub fn reload(&mut self, dataset: Vec<Record>) {
        self.dataset = dataset;
        self.pages = partition_by(&self.dataset, self.page_size);
        self.current = 0;
        debug!(
            "Table reloaded: {} records, {} pages",
            self.dataset.len(),
            self.pages.total_pages()
        );
    }

    /// Sorts the current page on `key`, then flips the sort direction.
    ///
    /// Only the visible page is reordered; other pages keep their order.
    pub fn sort_by(&mut self, key: &str) {
        let ascending = self.sort.ascending;
        if let Some(page) = self.pages.page_mut(self.current) {
            sort_records(page, key, ascending);
        }
        self.sort.advance(key);
        debug!(
            "Sorted page {} by '{}' ({})",
            self.current,
            key,
            if ascending { "ascending" } else { "descending" }
        );
    }

    /// Changes the page size and rebuilds pages from the dataset.
    ///
    /// The cursor is kept unless it falls past the new last page, in which
    /// case it moves to the last page.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), TableError> {
        let page_size = checked_page_size(size, &self.page_sizes)?;
        self.page_size = page_size;
        self.pages = partition_by(&self.dataset, page_size);
        self.current = self.pages.clamp(self.current);
        debug!(
            "Page size set to {}: {} pages, cursor at {}",
            size,
            self.pages.total_pages(),
            self.current
        );
        Ok(())
    }

    /// Moves to the page at `index`, clamped to the available pages.
    pub fn go_to_page(&mut self, index: usize) {
        self.current = self.pages.clamp(index);
        debug!("Moved to page {} (requested {})", self.current, index);
    }

    /// Searches the current page's records.
    ///
    /// Does not change any state. An empty result means no record matched.
    pub fn search(&self, query: &str) -> Vec<Record> {
        search_with(self.visible_rows(), self.search_keys(), query, self.search_mode)
    }

    /// Records of the current page.
    pub fn visible_rows(&self) -> &[Record] {
        self.pages.page(self.current).unwrap_or_default()
    }

    /// Footer figures for the current cursor.
    pub fn pagination_summary(&self) -> PaginationSummary {
        PaginationSummary::new(self.current, self.pages.total_pages())
    }

    /// Sets or clears the query applied by [`TableState::view`].
    ///
    /// An empty query clears it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.query = (!query.is_empty()).then_some(query);
    }

    /// Clears the active query.
    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Snapshot for the renderer.
    ///
    /// With an active query the rows are the search result over the current
    /// page; otherwise they are the current page.
    pub fn view(&self) -> TableView {
        let rows = match &self.query {
            Some(query) => self.search(query),
            None => self.visible_rows().to_vec(),
        };
        TableView {
            rows,
            summary: self.pagination_summary(),
            page_size: self.page_size(),
            query: self.query.clone(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The full dataset in load order.
    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    /// Display keys.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Keys used for search.
    pub fn search_keys(&self) -> &[String] {
        &self.search_keys
    }

    /// The search mode.
    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Configured page-size choices.
    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Zero-based index of the current page.
    pub fn current_page_index(&self) -> usize {
        self.current
    }

    /// Number of pages; at least 1.
    pub fn total_pages(&self) -> usize {
        self.pages.total_pages()
    }

    /// The current pages.
    pub fn pages(&self) -> &PageSet {
        &self.pages
    }

    /// Sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Active search query.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl fmt::Debug for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableState")
            .field("records", &self.dataset.len())
            .field("keys", &self.keys)
            .field("page_size", &self.page_size)
            .field("page_sizes", &self.page_sizes)
            .field("current", &self.current)
            .field("total_pages", &self.pages.total_pages())
            .field("sort", &self.sort)
            .field("query", &self.query)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Validates a requested page size against the configured choices.
fn checked_page_size(size: usize, choices: &[usize]) -> Result<NonZeroUsize, TableError> {
    let page_size = NonZeroUsize::new(size).ok_or(TableError::InvalidPageSize { size })?;
    if !choices.contains(&size) {
        return Err(TableError::not_configured(size, choices));
    }
    Ok(page_size)
}
