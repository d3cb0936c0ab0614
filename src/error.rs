//! Error types surfaced by level and config loading.

use thiserror::Error;

use crate::sim::level::MalformedLevelError;

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Crate-wide error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed level: {0}")]
    MalformedLevel(#[from] MalformedLevelError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
