//! Lookup module - the validated request and the normalizer that builds it.

mod lookup_model;
mod normalizer;

pub use lookup_model::{LookupRequest, MAX_IDS, MAX_TYPE_LENGTH};
pub use normalizer::normalize;
