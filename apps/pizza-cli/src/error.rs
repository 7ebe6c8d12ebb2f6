//! Error types for the pizza CLI.

use std::path::PathBuf;

use pizza_core::ValidationError;

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read order file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid order file: {0}")]
    OrderParse(#[from] toml::de::Error),

    #[error("Invalid order: {0}")]
    Core(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
