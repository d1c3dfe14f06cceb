//! Search handlers
//!
//! - `GET /v1/busca`      - filtered, paginated, media-enriched listing page
//! - `GET /v1/busca/{id}` - single media-enriched listing
//!
//! The query string is parsed from its raw form because tag parameters
//! repeat their key; a single-value map would drop occurrences.

use axum::{
    extract::{Path, RawQuery, State},
    Json,
};

use crate::db::search::SearchRequest;
use crate::models::{ListingWithMedia, Page};
use crate::state::AppState;
use crate::Result;

pub async fn search_listings(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Page<ListingWithMedia>>> {
    let items = parse_form_urlencoded(raw_query.as_deref().unwrap_or(""));
    let request = SearchRequest::from_items(
        &items,
        state.config.server.default_page_size,
        state.config.server.max_page_size,
    )?;

    let page = state.search_service.search(&request).await?;
    Ok(Json(page))
}

pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ListingWithMedia>> {
    match state.search_service.find_by_id(id).await? {
        Some(listing) => Ok(Json(listing)),
        None => Err(crate::Error::ListingNotFound(id)),
    }
}

fn parse_form_urlencoded(s: &str) -> Vec<(String, String)> {
    // `url::form_urlencoded` implements `application/x-www-form-urlencoded`
    // semantics (including '+' = space).
    url::form_urlencoded::parse(s.as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_keys_in_order() {
        let items = parse_form_urlencoded(
            "cidade=Campinas&caractInternasContem=Piscina&caractInternasContem=Academia",
        );
        assert_eq!(
            items,
            vec![
                ("cidade".to_string(), "Campinas".to_string()),
                ("caractInternasContem".to_string(), "Piscina".to_string()),
                ("caractInternasContem".to_string(), "Academia".to_string()),
            ]
        );
    }

    #[test]
    fn decodes_percent_and_plus_encoding() {
        let items = parse_form_urlencoded("bairro=Jardim%20Proen%C3%A7a&tipo=Casa+Terrea");
        assert_eq!(items[0].1, "Jardim Proença");
        assert_eq!(items[1].1, "Casa Terrea");
    }
}
