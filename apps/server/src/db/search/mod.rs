//! Dynamic search over the listing collection
//!
//! `filter` is the sparse criteria object, `params` the request-parsing
//! boundary, `query_builder` the filter-to-SQL compiler and `engine` the
//! executor.

pub mod engine;
pub mod filter;
pub mod params;
pub mod query_builder;

pub use engine::SearchEngine;
pub use filter::ListingFilter;
pub use params::{PageRequest, SearchRequest};
