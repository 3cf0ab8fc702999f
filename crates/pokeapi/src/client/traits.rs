//! PokéAPI client trait definition.

use async_trait::async_trait;

use crate::errors::PokeApiError;
use crate::models::{PokemonId, PokemonPayload};

/// Fetches a single Pokémon from the upstream API.
///
/// Implementations must map every failure into a [`PokeApiError`]; callers
/// never see transport-specific error types.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use pokefilter_pokeapi::{PokeApiClient, PokeApiError, PokemonId, PokemonPayload};
///
/// struct FixedClient;
///
/// #[async_trait]
/// impl PokeApiClient for FixedClient {
///     async fn get_pokemon_by_id(&self, id: PokemonId) -> Result<PokemonPayload, PokeApiError> {
///         Err(PokeApiError::NotFound { id })
///     }
/// }
/// ```
#[async_trait]
pub trait PokeApiClient: Send + Sync {
    /// Fetch the Pokémon with the given id.
    ///
    /// # Returns
    ///
    /// The decoded payload on success, [`PokeApiError::NotFound`] for an
    /// unknown id, or [`PokeApiError::Upstream`] for anything else.
    async fn get_pokemon_by_id(&self, id: PokemonId) -> Result<PokemonPayload, PokeApiError>;
}
