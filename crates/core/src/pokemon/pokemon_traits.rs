use crate::errors::Result;
use crate::lookup::LookupRequest;
use crate::pokemon::pokemon_model::{LookupReport, Pokemon};
use crate::PokemonId;
use async_trait::async_trait;

/// Trait for Pokémon lookup operations
#[async_trait]
pub trait PokemonServiceTrait: Send + Sync {
    /// Names of the requested Pokémon that have the requested type.
    async fn get_pokemons(&self, request: &LookupRequest) -> Result<Vec<String>>;
    /// Same lookup as [`get_pokemons`](Self::get_pokemons), with the per-id failures kept.
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupReport>;
    async fn get_pokemon_by_id(&self, id: PokemonId) -> Result<Pokemon>;
}
