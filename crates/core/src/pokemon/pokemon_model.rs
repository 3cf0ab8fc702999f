//! Pokemon domain models.

use std::collections::BTreeSet;

use pokefilter_pokeapi::{PokeApiError, PokemonPayload};
use serde::Serialize;

use crate::PokemonId;

/// Domain model representing a Pokémon and its types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pokemon {
    id: PokemonId,
    name: String,
    types: BTreeSet<String>,
}

impl Pokemon {
    /// Type names are stored lowercase.
    pub fn new<I, S>(id: PokemonId, name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id,
            name: name.into(),
            types: types
                .into_iter()
                .map(|t| t.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn id(&self) -> PokemonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &BTreeSet<String> {
        &self.types
    }

    /// Case-insensitive membership test against any of this Pokémon's types.
    pub fn has_type(&self, pokemon_type: &str) -> bool {
        self.types.contains(&pokemon_type.to_ascii_lowercase())
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl From<PokemonPayload> for Pokemon {
    fn from(payload: PokemonPayload) -> Self {
        let types: Vec<String> = payload.type_names().map(str::to_string).collect();
        Self::new(payload.id, payload.name, types)
    }
}

/// A failed single-id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub id: PokemonId,
    pub error: PokeApiError,
}

/// The settled result of one id's lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Pokemon),
    Failed(LookupFailure),
}

/// Result of a lookup that did not fail as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupReport {
    /// Names of the matching Pokémon, in request id order.
    pub names: Vec<String>,
    /// Ids that could not be retrieved. Non-empty means a partial failure.
    pub failures: Vec<LookupFailure>,
    /// Number of ids that were looked up.
    pub requested: usize,
}

impl LookupReport {
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}
