//! Listing repository - by-id lookup and facet queries
//!
//! The facet queries produce the distinct-value vocabularies that drive the
//! filter UI. City, neighborhood and type lists are sorted ascending with
//! NULLs excluded; tag vocabularies are deduplicated unions with no defined
//! order.

use sqlx::PgPool;

use crate::models::Listing;
use crate::Result;

#[derive(Debug, Clone)]
pub struct ListingRepository {
    pool: PgPool,
}

impl ListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single listing. Absence is `None`, not an error.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Listing>> {
        sqlx::query_as::<_, Listing>("SELECT l.* FROM listings l WHERE l.id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(crate::Error::Database)
    }

    pub async fn distinct_cities(&self) -> Result<Vec<String>> {
        sqlx::query_scalar(
            "SELECT DISTINCT l.city FROM listings l WHERE l.city IS NOT NULL ORDER BY l.city",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database)
    }

    pub async fn distinct_neighborhoods(&self, city: &str) -> Result<Vec<String>> {
        sqlx::query_scalar(
            "SELECT DISTINCT l.neighborhood FROM listings l \
             WHERE l.city = $1 AND l.neighborhood IS NOT NULL \
             ORDER BY l.neighborhood",
        )
        .bind(city)
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database)
    }

    pub async fn distinct_property_types(&self) -> Result<Vec<String>> {
        sqlx::query_scalar(
            "SELECT DISTINCT l.property_type FROM listings l \
             WHERE l.property_type IS NOT NULL \
             ORDER BY l.property_type",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database)
    }

    /// Union of every listing's internal tags, deduplicated. Vocabulary, not
    /// a ranked list; order is whatever the engine returns.
    pub async fn internal_feature_vocabulary(&self) -> Result<Vec<String>> {
        sqlx::query_scalar(
            "SELECT DISTINCT unnest(l.internal_features) FROM listings l \
             WHERE l.internal_features IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database)
    }

    pub async fn external_feature_vocabulary(&self) -> Result<Vec<String>> {
        sqlx::query_scalar(
            "SELECT DISTINCT unnest(l.external_features) FROM listings l \
             WHERE l.external_features IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database)
    }
}
