//! Search module.
//!
//! The (page, search term) query key and the catalog path it maps to.

mod query;

pub use query::{ProductQuery, DEFAULT_PAGE_SIZE};
