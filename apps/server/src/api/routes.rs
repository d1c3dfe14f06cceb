//! API routes
//!
//! The paths are the catalog's original public contract and stay stable for
//! the existing frontend.

use axum::{routing::get, Router};

use crate::api::handlers::{categories, search};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Search
        .route("/v1/busca", get(search::search_listings))
        .route("/v1/busca/:id", get(search::get_listing))
        // Facets
        .route("/v1/categoria/cidades", get(categories::cities))
        .route("/v1/categoria/bairros", get(categories::neighborhoods))
        .route("/v1/categoria/tipo-imovel", get(categories::property_types))
        .route(
            "/v1/categoria/carac-internas",
            get(categories::internal_features),
        )
        .route(
            "/v1/categoria/carac-externas",
            get(categories::external_features),
        )
}
