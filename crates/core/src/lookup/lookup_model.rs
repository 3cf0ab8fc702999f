//! Lookup request model.

use serde::Serialize;

use crate::PokemonId;

/// Maximum number of ids accepted in one request.
pub const MAX_IDS: usize = 10;

/// Maximum length of the type filter, in characters.
pub const MAX_TYPE_LENGTH: usize = 20;

/// A validated lookup: unique positive ids in first-occurrence order and a
/// lowercase alphabetic type filter.
///
/// Built by [`normalize`](super::normalize); immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest {
    ids: Vec<PokemonId>,
    #[serde(rename = "type")]
    pokemon_type: String,
}

impl LookupRequest {
    pub(crate) fn validated(ids: Vec<PokemonId>, pokemon_type: String) -> Self {
        Self { ids, pokemon_type }
    }

    /// Builds a request from already typed values, skipping validation.
    ///
    /// The aggregation engine tolerates whatever this produces, including an
    /// empty id list.
    pub fn new_unchecked(ids: Vec<PokemonId>, pokemon_type: impl Into<String>) -> Self {
        Self {
            ids,
            pokemon_type: pokemon_type.into(),
        }
    }

    pub fn ids(&self) -> &[PokemonId] {
        &self.ids
    }

    pub fn pokemon_type(&self) -> &str {
        &self.pokemon_type
    }
}
