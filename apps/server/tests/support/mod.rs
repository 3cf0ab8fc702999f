#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pokefilter_pokeapi::{PokeApiClient, PokeApiError, PokemonId, PokemonPayload};
use pokefilter_server::{api::app_router, config::Config, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Canned upstream: ids without an entry answer 404.
#[derive(Default)]
pub struct StubPokeApi {
    responses: HashMap<PokemonId, Result<PokemonPayload, PokeApiError>>,
}

impl StubPokeApi {
    pub fn with_pokemon(mut self, id: PokemonId, name: &str, types: &[&str]) -> Self {
        let payload = serde_json::from_value(json!({
            "id": id,
            "name": name,
            "types": types
                .iter()
                .map(|t| json!({ "type": { "name": t, "url": "" } }))
                .collect::<Vec<_>>(),
        }))
        .unwrap();
        self.responses.insert(id, Ok(payload));
        self
    }

    pub fn with_error(mut self, id: PokemonId, error: PokeApiError) -> Self {
        self.responses.insert(id, Err(error));
        self
    }
}

#[async_trait]
impl PokeApiClient for StubPokeApi {
    async fn get_pokemon_by_id(&self, id: PokemonId) -> Result<PokemonPayload, PokeApiError> {
        self.responses
            .get(&id)
            .cloned()
            .unwrap_or(Err(PokeApiError::NotFound { id }))
    }
}

pub fn build_test_router(stub: StubPokeApi) -> Router {
    let config = Config::default();
    let state = AppState::with_client(Arc::new(stub));
    app_router(state, &config)
}

pub fn default_stub() -> StubPokeApi {
    StubPokeApi::default()
        .with_pokemon(1, "bulbasaur", &["grass", "poison"])
        .with_pokemon(4, "charmander", &["fire"])
        .with_pokemon(6, "charizard", &["fire", "flying"])
        .with_pokemon(25, "pikachu", &["electric"])
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}
