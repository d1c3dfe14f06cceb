//! Search service
//!
//! Composes the filter compiler and executor with media enrichment: run the
//! query, then decorate each result row with its resolved media URLs. The
//! enrichment is a separate stage after query execution so the query path
//! stays independent of the filesystem.

use std::sync::Arc;

use crate::db::search::{SearchEngine, SearchRequest};
use crate::db::ListingRepository;
use crate::media::MediaResolver;
use crate::models::{Listing, ListingWithMedia, Page};
use crate::Result;

pub struct SearchService {
    engine: SearchEngine,
    listings: ListingRepository,
    media: Arc<MediaResolver>,
}

impl SearchService {
    pub fn new(
        engine: SearchEngine,
        listings: ListingRepository,
        media: Arc<MediaResolver>,
    ) -> Self {
        Self {
            engine,
            listings,
            media,
        }
    }

    /// Run a search request and enrich the resulting page with media URLs.
    pub async fn search(&self, request: &SearchRequest) -> Result<Page<ListingWithMedia>> {
        let mut page = self.engine.search(request).await?;

        let rows = std::mem::take(&mut page.content);
        let mut content = Vec::with_capacity(rows.len());
        // Sequential per row; the page-size clamp bounds the scan count.
        for listing in rows {
            content.push(self.with_media(listing).await);
        }

        Ok(page.with_content(content))
    }

    /// Single-item lookup. Absence is `None`; only the HTTP edge turns that
    /// into a status code.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ListingWithMedia>> {
        let Some(listing) = self.listings.find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.with_media(listing).await))
    }

    async fn with_media(&self, listing: Listing) -> ListingWithMedia {
        let media = self.media.resolve(listing.id).await;
        ListingWithMedia { listing, media }
    }
}
