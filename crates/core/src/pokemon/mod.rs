//! Pokemon module - domain entity, lookup outcomes, and the aggregation service.

mod pokemon_model;
mod pokemon_service;
mod pokemon_traits;


pub use pokemon_model::{LookupFailure, LookupOutcome, LookupReport, Pokemon};
pub use pokemon_service::PokemonService;
pub use pokemon_traits::PokemonServiceTrait;
