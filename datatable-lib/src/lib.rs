//! Table state engine
//!
//! Partitions an in-memory dataset into pages and answers which rows are
//! visible after sort, search, page-size and navigation requests. Drawing the
//! rows is left to the host.

pub mod compare;
pub mod error;
pub mod events;
pub mod filter;
pub mod model;
pub mod options;
pub mod paginate;

mod state;
mod view;

pub use state::*;
pub use view::*;
