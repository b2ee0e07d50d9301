//! Routing-subsystem error type.

use thiserror::Error;

use hos_core::Coordinate;

/// Errors produced by `hos-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("cannot route between degenerate coordinates {origin} and {destination}")]
    Degenerate {
        origin:      Coordinate,
        destination: Coordinate,
    },

    #[error("missing OpenRouteService API key (set ORS_API_KEY)")]
    MissingApiKey,

    #[error("autocomplete query is empty")]
    EmptyQuery,

    #[error("routing service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed routing response: {0}")]
    Malformed(String),

    #[cfg(feature = "ors")]
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "ors")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
