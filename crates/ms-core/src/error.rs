//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `ms-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{what} multiplier must be finite and >= 0, got {value}")]
    InvalidMultiplier {
        what:  String,
        value: f64,
    },
}

/// Shorthand result type for `ms-core`.
pub type CoreResult<T> = Result<T, CoreError>;
