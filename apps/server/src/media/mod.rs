//! Media URL resolution from the per-listing file area

pub mod resolver;

pub use resolver::MediaResolver;
