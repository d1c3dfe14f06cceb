//! Facet list handlers
//!
//! `GET /v1/categoria/*` - distinct-value vocabularies for the filter UI.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::state::AppState;
use crate::Result;

pub async fn cities(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.catalog_service.cities().await?))
}

#[derive(Debug, Deserialize)]
pub struct NeighborhoodsQuery {
    cidade: Option<String>,
}

pub async fn neighborhoods(
    State(state): State<AppState>,
    Query(query): Query<NeighborhoodsQuery>,
) -> Result<Json<Vec<String>>> {
    let neighborhoods = state
        .catalog_service
        .neighborhoods(query.cidade.as_deref())
        .await?;
    Ok(Json(neighborhoods))
}

pub async fn property_types(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.catalog_service.property_types().await?))
}

pub async fn internal_features(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.catalog_service.internal_features().await?))
}

pub async fn external_features(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.catalog_service.external_features().await?))
}
