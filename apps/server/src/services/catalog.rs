//! Catalog facet service
//!
//! Distinct-value vocabularies used to populate the filter UI. Independent
//! of the search path; every query is read-only.

use crate::db::ListingRepository;
use crate::{Error, Result};

pub struct CatalogService {
    listings: ListingRepository,
}

impl CatalogService {
    pub fn new(listings: ListingRepository) -> Self {
        Self { listings }
    }

    /// All cities with at least one listing, ascending.
    pub async fn cities(&self) -> Result<Vec<String>> {
        self.listings.distinct_cities().await
    }

    /// Neighborhoods of one city, ascending. The city is required; a city
    /// with no listings yields an empty list.
    pub async fn neighborhoods(&self, city: Option<&str>) -> Result<Vec<String>> {
        let city = city.map(str::trim).unwrap_or_default();
        if city.is_empty() {
            return Err(Error::InvalidArgument(
                "Query parameter 'cidade' must not be blank".to_string(),
            ));
        }
        self.listings.distinct_neighborhoods(city).await
    }

    /// All property types in use, ascending.
    pub async fn property_types(&self) -> Result<Vec<String>> {
        self.listings.distinct_property_types().await
    }

    /// Internal tag vocabulary; order is unspecified.
    pub async fn internal_features(&self) -> Result<Vec<String>> {
        self.listings.internal_feature_vocabulary().await
    }

    /// External tag vocabulary; order is unspecified.
    pub async fn external_features(&self) -> Result<Vec<String>> {
        self.listings.external_feature_vocabulary().await
    }
}
