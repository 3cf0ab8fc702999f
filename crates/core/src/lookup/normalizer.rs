//! Request normalizer.
//!
//! Turns the raw `id` and `type` query values into a [`LookupRequest`].
//! Both fields are checked independently so a caller sees every problem at
//! once; within a field the first failing rule wins.

use std::collections::HashSet;

use log::debug;

use super::lookup_model::{LookupRequest, MAX_IDS, MAX_TYPE_LENGTH};
use crate::errors::{ValidationError, Violation};
use crate::PokemonId;

const IDS_FIELD: &str = "id";
const TYPE_FIELD: &str = "type";

/// Validate and normalize raw query input.
///
/// # Arguments
///
/// * `raw_ids` - comma separated ids, e.g. `"1, 4,7"`; `None` when absent
/// * `raw_type` - type filter, e.g. `"Fire"`; `None` when absent
///
/// # Returns
///
/// The normalized request, or a [`ValidationError`] listing the violations.
pub fn normalize(
    raw_ids: Option<&str>,
    raw_type: Option<&str>,
) -> Result<LookupRequest, ValidationError> {
    debug!("Validating Pokemon request parameters");

    match (parse_ids(raw_ids), parse_type(raw_type)) {
        (Ok(ids), Ok(pokemon_type)) => Ok(LookupRequest::validated(ids, pokemon_type)),
        (ids, pokemon_type) => {
            let violations = [ids.err(), pokemon_type.err()]
                .into_iter()
                .flatten()
                .collect();
            Err(ValidationError::new(violations))
        }
    }
}

fn parse_ids(raw_ids: Option<&str>) -> Result<Vec<PokemonId>, Violation> {
    let tokens: Vec<&str> = raw_ids
        .unwrap_or_default()
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(Violation::new(IDS_FIELD, "No valid Pokemon IDs provided"));
    }

    if tokens.len() > MAX_IDS {
        return Err(Violation::new(
            IDS_FIELD,
            format!("Maximum {} Pokemon IDs are allowed", MAX_IDS),
        ));
    }

    let mut ids = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| parse_id(index + 1, token))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(*id));

    Ok(ids)
}

/// Parses one base-10 integer literal: an optional leading `-` followed by
/// ASCII digits.
fn parse_id(position: usize, token: &str) -> Result<PokemonId, Violation> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Violation::new(
            IDS_FIELD,
            format!(
                "Invalid Pokemon ID at position {}: \"{}\". Must be a whole number.",
                position, token
            ),
        ));
    }

    let not_positive = |shown: &dyn std::fmt::Display| {
        Violation::new(
            IDS_FIELD,
            format!(
                "Invalid Pokemon ID at position {}: {}. Must be greater than 0.",
                position, shown
            ),
        )
    };
    let out_of_range = || {
        Violation::new(
            IDS_FIELD,
            format!(
                "Invalid Pokemon ID at position {}: \"{}\". Value is out of range.",
                position, token
            ),
        )
    };

    match token.parse::<i128>() {
        Ok(value) if value <= 0 => Err(not_positive(&value)),
        Ok(value) => PokemonId::try_from(value).map_err(|_| out_of_range()),
        // Only overflow is left at this point.
        Err(_) if token.starts_with('-') => Err(not_positive(&token)),
        Err(_) => Err(out_of_range()),
    }
}

/// Trims first, so surrounding whitespace is ignored and a blank value counts
/// as missing.
fn parse_type(raw_type: Option<&str>) -> Result<String, Violation> {
    let value = raw_type.unwrap_or_default().trim();

    if value.is_empty() {
        return Err(Violation::new(
            TYPE_FIELD,
            "The \"type\" parameter is required",
        ));
    }

    if value.chars().count() > MAX_TYPE_LENGTH {
        return Err(Violation::new(
            TYPE_FIELD,
            format!(
                "Pokemon type cannot be longer than {} characters",
                MAX_TYPE_LENGTH
            ),
        ));
    }

    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Violation::new(
            TYPE_FIELD,
            "Pokemon type must contain only letters",
        ));
    }

    Ok(value.to_ascii_lowercase())
}
