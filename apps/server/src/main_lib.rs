use std::sync::Arc;

use anyhow::Context;
use pokefilter_core::pokemon::{PokemonService, PokemonServiceTrait};
use pokefilter_pokeapi::{HttpPokeApiClient, PokeApiClient};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub pokemon_service: Arc<dyn PokemonServiceTrait + Send + Sync>,
}

impl AppState {
    /// Wires the lookup service on top of any upstream client.
    pub fn with_client(client: Arc<dyn PokeApiClient>) -> Arc<Self> {
        Arc::new(Self {
            pokemon_service: Arc::new(PokemonService::new(client)),
        })
    }
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    reqwest::Url::parse(&config.pokeapi_base_url).with_context(|| {
        format!(
            "Invalid POKEFILTER_POKEAPI_BASE_URL: {}",
            config.pokeapi_base_url
        )
    })?;

    let client = HttpPokeApiClient::with_config(config.pokeapi_config())
        .context("Failed to build the Pokemon API HTTP client")?;
    tracing::info!(
        "Pokemon API client targeting {} (timeout {:?})",
        client.base_url(),
        config.upstream_timeout
    );

    Ok(AppState::with_client(Arc::new(client)))
}
