//! Core error types for the lookup pipeline.
//!
//! Per-id upstream failures are normally absorbed by the aggregation engine;
//! the variants that leave it are the two aggregate failures and input
//! validation errors from the normalizer.

use std::fmt;

use pokefilter_pokeapi::PokeApiError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for lookup operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The raw request did not pass validation.
    #[error("{0}")]
    InvalidInput(#[from] ValidationError),

    /// A single-id lookup failed.
    #[error("{0}")]
    PokeApi(#[from] PokeApiError),

    /// Every requested id came back as not found.
    #[error("All requested Pokemon not found")]
    AggregateNotFound,

    /// Every requested id failed and at least one failure was not a 404.
    #[error("Could not retrieve any of the requested Pokemon.")]
    AggregateUnavailable,
}

/// The meaning of an [`Error`], independent of any transport status.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Upstream,
    AggregateNotFound,
    AggregateUnavailable,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::PokeApi(PokeApiError::NotFound { .. }) => ErrorKind::NotFound,
            Self::PokeApi(PokeApiError::Upstream { .. }) => ErrorKind::Upstream,
            Self::AggregateNotFound => ErrorKind::AggregateNotFound,
            Self::AggregateUnavailable => ErrorKind::AggregateUnavailable,
        }
    }

    /// Status and message reported by the upstream API, for
    /// [`ErrorKind::Upstream`] errors only.
    pub fn upstream(&self) -> Option<(u16, &str)> {
        match self {
            Self::PokeApi(PokeApiError::Upstream { status, message }) => {
                Some((*status, message.as_str()))
            }
            _ => None,
        }
    }
}

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Query parameter the rule applies to (`id` or `type`).
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All violations found while normalizing a request.
///
/// Displays as the violation messages joined into sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// First violation reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<&str> = None;
        for violation in &self.violations {
            if let Some(prev) = previous {
                f.write_str(if prev.ends_with('.') { " " } else { ". " })?;
            }
            f.write_str(&violation.message)?;
            previous = Some(&violation.message);
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self::new(vec![violation])
    }
}
