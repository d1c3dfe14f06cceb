//! HTTP layer - router assembly, handlers and middleware

pub mod handlers;
pub mod middleware;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .merge(routes::api_routes());

    // Serve the media root directly when no CDN/reverse proxy fronts it,
    // mirroring the catalog's original static resource mapping.
    if state.config.media.serve_local {
        router = router.nest_service(
            &state.config.media.base_url,
            ServeDir::new(&state.config.media.root_dir),
        );
    }

    router
        .layer(middleware::layers::trace())
        .layer(middleware::layers::compression())
        .layer(middleware::layers::cors(&state.config.cors.allowed_origins))
        .with_state(state)
}
