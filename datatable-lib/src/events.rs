//! Host events and view observers.
//!
//! Hosts translate user input into [`TableEvent`]s and hand them to
//! [`TableState::dispatch`]. Every successful dispatch returns a fresh
//! [`TableView`] and pushes it to the registered observers.

use log::debug;

use crate::TableState;
use crate::error::TableError;
use crate::model::Record;
use crate::view::TableView;

/// A user action forwarded by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// A column header was activated.
    SortRequested(String),
    /// A pagination button was activated.
    PageRequested(usize),
    /// A different page size was picked.
    PageSizeChanged(usize),
    /// The search input changed. An empty query clears the search.
    SearchChanged(String),
    /// The dataset was replaced.
    Reload(Vec<Record>),
}

impl TableEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SortRequested(_) => "sort",
            Self::PageRequested(_) => "page",
            Self::PageSizeChanged(_) => "page_size",
            Self::SearchChanged(_) => "search",
            Self::Reload(_) => "reload",
        }
    }
}

/// Receives the view produced after each dispatched event.
///
/// Closures taking `&TableView` implement this trait.
pub trait TableObserver {
    /// Called with the fresh view.
    fn on_view(&mut self, view: &TableView);
}

impl<F> TableObserver for F
where
    F: FnMut(&TableView),
{
    fn on_view(&mut self, view: &TableView) {
        self(view)
    }
}

impl TableState {
    /// Registers an observer notified after every successful dispatch.
    pub fn subscribe(&mut self, observer: impl TableObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies an event and returns the resulting view.
    ///
    /// A search event sets the active query; any other event clears it so
    /// the host shows the whole page again. On error nothing changes and
    /// observers are not notified.
    pub fn dispatch(&mut self, event: TableEvent) -> Result<TableView, TableError> {
        debug!("Dispatching {} event", event.kind());

        match event {
            TableEvent::SortRequested(key) => {
                self.clear_query();
                self.sort_by(&key);
            }
            TableEvent::PageRequested(index) => {
                self.clear_query();
                self.go_to_page(index);
            }
            TableEvent::PageSizeChanged(size) => {
                self.set_page_size(size)?;
                self.clear_query();
            }
            TableEvent::SearchChanged(query) => self.set_query(query),
            TableEvent::Reload(dataset) => {
                self.clear_query();
                self.reload(dataset);
            }
        }

        let view = self.view();
        self.notify(&view);
        Ok(view)
    }

    fn notify(&mut self, view: &TableView) {
        for observer in &mut self.observers {
            observer.on_view(view);
        }
    }
}
