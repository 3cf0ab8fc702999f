//! Error types for PokéAPI lookups.
//!
//! Every failure of a single `/pokemon/{id}` call is folded into one of two
//! variants so that callers can reason about a batch of outcomes without
//! knowing anything about HTTP or the transport.

use thiserror::Error;

use crate::models::PokemonId;

/// Status used when no upstream status is available.
pub const SERVICE_UNAVAILABLE: u16 = 503;

/// Message used when the upstream could not be reached at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network or connectivity error occurred";

/// Errors returned by a [`PokeApiClient`](crate::PokeApiClient).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PokeApiError {
    /// The upstream answered 404 for this id.
    #[error("Pokemon with ID {id} not found.")]
    NotFound {
        /// The id that does not exist upstream
        id: PokemonId,
    },

    /// Any other failure: a non-404 HTTP status, a transport error or an
    /// unreadable payload.
    #[error("Pokemon API error ({status}): {message}")]
    Upstream {
        /// HTTP status reported by the upstream, or 503 when there was none
        status: u16,
        /// Human readable description, including the upstream message if any
        message: String,
    },
}

impl PokeApiError {
    /// Error for a call that never produced an HTTP response.
    pub fn network() -> Self {
        Self::Upstream {
            status: SERVICE_UNAVAILABLE,
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    /// Maps a non-2xx response to an error.
    ///
    /// `upstream_message` is the `message` field of the error body, if the
    /// upstream sent one.
    pub fn from_status(id: PokemonId, status: u16, upstream_message: Option<&str>) -> Self {
        if status == 404 {
            return Self::NotFound { id };
        }

        let message = match upstream_message.filter(|m| !m.is_empty()) {
            Some(detail) => format!("Failed to fetch pokemon with ID {}: {}", id, detail),
            None => format!("Failed to fetch pokemon with ID {}", id),
        };

        Self::Upstream { status, message }
    }

    /// Numeric status hint. The boundary decides what to do with it.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Upstream { status, .. } => *status,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Upstream { status: 429, .. })
    }
}
