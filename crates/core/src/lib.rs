//! Pokéfilter Core - request normalization and the lookup aggregation engine.
//!
//! This crate answers "which of these Pokémon have type T?". It is transport
//! agnostic: the upstream API is reached through the
//! [`PokeApiClient`](pokefilter_pokeapi::PokeApiClient) trait, and the HTTP
//! boundary lives in the server app.
//!
//! ```text
//! raw query -> lookup::normalize -> LookupRequest
//!                                        |
//!                                        v
//!                          PokemonService (fan-out, join_all)
//!                                        |
//!                                        v
//!                        PokeApiClient per id -> Pokemon
//!                                        |
//!                                        v
//!                          classify + filter -> Vec<String>
//! ```

pub mod errors;
pub mod lookup;
pub mod pokemon;

pub use pokefilter_pokeapi::PokemonId;

// Re-export error types
pub use errors::{Error, ErrorKind, Result, ValidationError, Violation};
