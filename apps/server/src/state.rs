//! Shared application state
//!
//! Everything a request handler needs: configuration, the connection pool
//! and the services built over it. Cloning is cheap; all requests share the
//! same underlying resources read-only.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::db::{ListingRepository, SearchEngine};
use crate::media::MediaResolver;
use crate::services::{CatalogService, SearchService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pool: PgPool,
    pub search_service: Arc<SearchService>,
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
            .connect(&config.database.url)
            .await
            .context("Failed to connect to Postgres")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;

        let media = Arc::new(MediaResolver::new(&config.media));
        let engine = SearchEngine::new(pool.clone());
        let listings = ListingRepository::new(pool.clone());

        let search_service = Arc::new(SearchService::new(
            engine,
            listings.clone(),
            Arc::clone(&media),
        ));
        let catalog_service = Arc::new(CatalogService::new(listings));

        Ok(Self {
            config: Arc::new(config),
            pool,
            search_service,
            catalog_service,
        })
    }
}
