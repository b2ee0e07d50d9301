//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The base error type shared by all `hos-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("clock overflow advancing {hours} h from {at}")]
    ClockOverflow { at: NaiveDateTime, hours: f64 },
}

/// Shorthand result type for `hos-core`.
pub type CoreResult<T> = Result<T, CoreError>;
