pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod view;

pub use catalog::{Book, BookId, Catalog};
pub use error::{CatalogError, Result};
pub use view::{CatalogView, SortDirection, SortKey, SortState, PAGE_SIZE};
