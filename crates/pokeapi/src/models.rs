//! Upstream payload models.
//!
//! Only the fields the lookup pipeline reads are modelled; serde ignores the
//! rest of the (very large) PokéAPI document.

use serde::{Deserialize, Serialize};

/// Numeric Pokémon identifier as used in `/pokemon/{id}`.
pub type PokemonId = u64;

/// Response body of `GET /pokemon/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPayload {
    pub id: PokemonId,
    pub name: String,
    pub types: Vec<TypeSlot>,
}

/// One entry of the `types` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// A `{ name, url }` reference to another PokéAPI resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Error body the upstream may attach to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl PokemonPayload {
    /// Type names in the order the upstream lists them.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.type_ref.name.as_str())
    }
}
