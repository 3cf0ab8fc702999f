use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use pokefilter_core::{lookup::normalize, Error as CoreError};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ErrorResponse, PokemonsResponse},
};

/// First value for `key`; later repeats are ignored.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[utoipa::path(
    get,
    path = "/api/v1/pokemons",
    params(
        ("id" = String, Query, description = "Comma-separated Pokemon ids, at most 10"),
        ("type" = String, Query, description = "Pokemon type, letters only")
    ),
    responses(
        (status = 200, description = "Names of the matching Pokemon", body = PokemonsResponse),
        (status = 400, description = "Invalid query", body = ErrorResponse),
        (status = 404, description = "None of the Pokemon exist", body = ErrorResponse),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
        (status = 503, description = "Upstream unavailable", body = ErrorResponse)
    )
)]
pub async fn get_pokemons(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<PokemonsResponse>> {
    let request = normalize(first_param(&params, "id"), first_param(&params, "type"))
        .map_err(CoreError::from)?;

    let report = state.pokemon_service.lookup(&request).await?;
    tracing::info!(
        "Pokemon lookup for type '{}': {} matched, {} failed, {} requested",
        request.pokemon_type(),
        report.names.len(),
        report.failed_count(),
        report.requested
    );

    Ok(Json(PokemonsResponse {
        pokemons: report.names,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/pokemons", get(get_pokemons))
}
