//! Listing catalog server - Rust implementation
//!
//! A read-only search API over a real-estate listing catalog:
//! - Dynamic filter search with pagination (`/v1/busca`)
//! - Single listing lookup with media enrichment (`/v1/busca/{id}`)
//! - Facet vocabularies for the filter UI (`/v1/categoria/*`)
//! - Media URLs derived from a per-listing file area at read time

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod media;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
