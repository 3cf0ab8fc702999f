use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, error, warn};
use pokefilter_pokeapi::PokeApiClient;

use super::pokemon_model::{LookupFailure, LookupOutcome, LookupReport, Pokemon};
use super::pokemon_traits::PokemonServiceTrait;
use crate::errors::{Error, Result};
use crate::lookup::LookupRequest;
use crate::PokemonId;

/// Aggregation engine: one concurrent upstream lookup per requested id,
/// tolerant of partial failure.
pub struct PokemonService {
    client: Arc<dyn PokeApiClient>,
}

impl PokemonService {
    pub fn new(client: Arc<dyn PokeApiClient>) -> Self {
        Self { client }
    }

    async fn fetch_outcome(&self, id: PokemonId) -> LookupOutcome {
        match self.client.get_pokemon_by_id(id).await {
            Ok(payload) => LookupOutcome::Found(Pokemon::from(payload)),
            Err(error) => LookupOutcome::Failed(LookupFailure { id, error }),
        }
    }
}

/// Classifies settled outcomes and reduces them to the matching names.
///
/// `outcomes` must be in request id order; the returned names keep it.
fn reduce_outcomes(outcomes: Vec<LookupOutcome>, pokemon_type: &str) -> Result<LookupReport> {
    let requested = outcomes.len();
    let mut found = Vec::with_capacity(requested);
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome {
            LookupOutcome::Found(pokemon) => found.push(pokemon),
            LookupOutcome::Failed(failure) => failures.push(failure),
        }
    }

    if found.is_empty() && !failures.is_empty() {
        if failures.iter().all(|f| f.error.is_not_found()) {
            warn!("All requested Pokemon resulted in a not found error.");
            return Err(Error::AggregateNotFound);
        }

        error!("All requested Pokemons failed to be retrieved with various errors.");
        return Err(Error::AggregateUnavailable);
    }

    if !failures.is_empty() {
        warn!(
            "Failed to retrieve {} out of {} requested Pokemons.",
            failures.len(),
            requested
        );
    }

    let names = found
        .into_iter()
        .filter(|pokemon| pokemon.has_type(pokemon_type))
        .map(Pokemon::into_name)
        .collect();

    Ok(LookupReport {
        names,
        failures,
        requested,
    })
}

#[async_trait]
impl PokemonServiceTrait for PokemonService {
    async fn get_pokemons(&self, request: &LookupRequest) -> Result<Vec<String>> {
        self.lookup(request).await.map(|report| report.names)
    }

    async fn lookup(&self, request: &LookupRequest) -> Result<LookupReport> {
        let ids = request.ids();
        if ids.is_empty() {
            return Ok(LookupReport::default());
        }

        debug!(
            "Looking up {} Pokemon for type '{}'",
            ids.len(),
            request.pokemon_type()
        );

        // join_all keeps input order and waits for every future, so one slow
        // or failing id never cancels the others.
        let outcomes = join_all(ids.iter().map(|&id| self.fetch_outcome(id))).await;

        reduce_outcomes(outcomes, request.pokemon_type())
    }

    async fn get_pokemon_by_id(&self, id: PokemonId) -> Result<Pokemon> {
        let payload = self.client.get_pokemon_by_id(id).await?;
        Ok(Pokemon::from(payload))
    }
}
