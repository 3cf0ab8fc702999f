use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokefilter_core::{Error as CoreError, ErrorKind};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

impl ApiError {
    /// HTTP status and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e.kind() {
                ErrorKind::InvalidInput => (StatusCode::BAD_REQUEST, e.to_string()),
                ErrorKind::NotFound | ErrorKind::AggregateNotFound => {
                    (StatusCode::NOT_FOUND, e.to_string())
                }
                ErrorKind::Upstream => match e.upstream() {
                    Some((status, message)) => upstream_status_and_message(status, message),
                    None => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
                },
                ErrorKind::AggregateUnavailable => {
                    (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
                }
            },
            ApiError::Anyhow(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

/// 400, 404 and 429 pass through; every other upstream status is reported as 503.
fn upstream_status_and_message(status: u16, message: &str) -> (StatusCode, String) {
    let or_default = |fallback: &str| {
        if message.is_empty() {
            fallback.to_string()
        } else {
            message.to_string()
        }
    };

    match status {
        400 => (StatusCode::BAD_REQUEST, or_default("Bad request to Pokemon API")),
        404 => (StatusCode::NOT_FOUND, or_default("Pokemon not found")),
        429 => (
            StatusCode::TOO_MANY_REQUESTS,
            or_default("Rate limit exceeded. Please try again later."),
        ),
        _ => (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Pokemon API error: {}", message),
        ),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("Error processing request: {}", self);
        } else {
            tracing::warn!("Error processing request: {}", self);
        }
        let body = Json(ErrorResponse { message });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
