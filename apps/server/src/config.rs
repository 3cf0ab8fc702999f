use std::{net::SocketAddr, time::Duration};

use pokefilter_pokeapi::{PokeApiConfig, DEFAULT_BASE_URL};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub pokeapi_base_url: String,
    /// Per upstream call; a slow id fails on its own instead of stalling the batch.
    pub upstream_timeout: Duration,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr: SocketAddr = get("POKEFILTER_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .expect("Invalid POKEFILTER_LISTEN_ADDR");
        let pokeapi_base_url =
            get("POKEFILTER_POKEAPI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let upstream_timeout_ms: u64 = get("POKEFILTER_UPSTREAM_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS);
        let cors_allow = get("POKEFILTER_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = get("POKEFILTER_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let log_format = get("POKEFILTER_LOG_FORMAT").unwrap_or_else(|| "text".into());
        Self {
            listen_addr,
            pokeapi_base_url,
            upstream_timeout: Duration::from_millis(upstream_timeout_ms),
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        }
    }

    pub fn pokeapi_config(&self) -> PokeApiConfig {
        PokeApiConfig {
            base_url: self.pokeapi_base_url.clone(),
            request_timeout: self.upstream_timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
