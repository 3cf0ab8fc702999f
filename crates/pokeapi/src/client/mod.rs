//! PokéAPI client abstraction and its HTTP implementation.
//!
//! The core crate only sees the [`PokeApiClient`] trait, which keeps the
//! aggregation logic testable with in-memory mocks.

mod http;
mod traits;

pub use http::{HttpPokeApiClient, PokeApiConfig, DEFAULT_BASE_URL};
pub use traits::PokeApiClient;
