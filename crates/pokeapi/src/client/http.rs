//! reqwest-backed PokéAPI client.
//!
//! # API Endpoints
//!
//! - Pokémon by id: `{base_url}/pokemon/{id}`

use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::{Client, Response};

use super::traits::PokeApiClient;
use crate::errors::{PokeApiError, SERVICE_UNAVAILABLE};
use crate::models::{ApiErrorBody, PokemonId, PokemonPayload};

/// Public PokéAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default HTTP request timeout
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`HttpPokeApiClient`].
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    /// Base URL without the `/pokemon/{id}` suffix.
    pub base_url: String,
    /// Upper bound for a single request, connect and body included.
    pub request_timeout: Duration,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// PokéAPI client over HTTP.
///
/// The inner [`Client`] pools connections, so build one instance at startup
/// and share it behind an `Arc`.
///
/// # Example
///
/// ```ignore
/// let client = HttpPokeApiClient::new()?;
/// let bulbasaur = client.get_pokemon_by_id(1).await?;
/// ```
pub struct HttpPokeApiClient {
    client: Client,
    base_url: String,
}

impl HttpPokeApiClient {
    /// Create a client for the public PokéAPI with default settings.
    pub fn new() -> reqwest::Result<Self> {
        Self::with_config(PokeApiConfig::default())
    }

    /// Create a client with a custom base URL and timeout.
    ///
    /// Fails when the TLS backend cannot be initialised; there is no fallback
    /// client, since one would run without the configured timeout.
    pub fn with_config(config: PokeApiConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn pokemon_url(&self, id: PokemonId) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    /// Turn a non-2xx response into an error, reading the optional
    /// `{ "message": .. }` body.
    async fn error_from_response(id: PokemonId, response: Response) -> PokeApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let upstream_message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        PokeApiError::from_status(id, status, upstream_message.as_deref())
    }
}

#[async_trait]
impl PokeApiClient for HttpPokeApiClient {
    async fn get_pokemon_by_id(&self, id: PokemonId) -> Result<PokemonPayload, PokeApiError> {
        let started = Instant::now();
        let url = self.pokemon_url(id);
        info!("Fetching Pokemon from: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    "Pokemon API request failed after {}ms with network error. ID: {}, Error: {}",
                    started.elapsed().as_millis(),
                    id,
                    e
                );
                return Err(PokeApiError::network());
            }
        };

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err = Self::error_from_response(id, response).await;
            let elapsed = started.elapsed().as_millis();
            if err.is_not_found() || err.is_rate_limited() {
                warn!(
                    "Pokemon API request rejected after {}ms. ID: {}, Status: {}, Message: {}",
                    elapsed, id, status, err
                );
            } else {
                error!(
                    "Pokemon API request failed after {}ms. ID: {}, Status: {}, Message: {}",
                    elapsed, id, status, err
                );
            }
            return Err(err);
        }

        let payload = response.json::<PokemonPayload>().await.map_err(|e| {
            error!(
                "Pokemon API response unreadable after {}ms. ID: {}, Error: {}",
                started.elapsed().as_millis(),
                id,
                e
            );
            if e.is_decode() {
                PokeApiError::Upstream {
                    status: SERVICE_UNAVAILABLE,
                    message: format!("Invalid payload for pokemon with ID {}: {}", id, e),
                }
            } else {
                PokeApiError::network()
            }
        })?;

        info!(
            "Pokemon API request completed in {}ms for ID: {}",
            started.elapsed().as_millis(),
            id
        );

        Ok(payload)
    }
}
