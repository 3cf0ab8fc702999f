//! Pokéfilter PokéAPI Crate
//!
//! This crate wraps the third-party PokéAPI (`https://pokeapi.co`) behind a
//! small, provider-agnostic client trait.
//!
//! # Overview
//!
//! - [`PokeApiClient`] - the lookup contract the core crate depends on
//! - [`HttpPokeApiClient`] - reqwest implementation of that contract
//! - [`PokeApiError`] - transport and HTTP failures folded into two variants
//! - [`PokemonPayload`] - the subset of the upstream JSON body we consume
//!
//! # Error mapping
//!
//! ```text
//! HTTP 404                  -> PokeApiError::NotFound { id }
//! any other non-2xx status  -> PokeApiError::Upstream { status, message }
//! no response (I/O, timeout)-> PokeApiError::Upstream { 503, "Network or connectivity error occurred" }
//! ```

pub mod client;
pub mod errors;
pub mod models;

pub use client::{HttpPokeApiClient, PokeApiClient, PokeApiConfig, DEFAULT_BASE_URL};
pub use errors::{PokeApiError, NETWORK_ERROR_MESSAGE, SERVICE_UNAVAILABLE};
pub use models::{ApiErrorBody, NamedResource, PokemonId, PokemonPayload, TypeSlot};
