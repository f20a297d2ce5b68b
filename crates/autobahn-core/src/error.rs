//! Error types for autobahn-core

use thiserror::Error;

/// Main error type for autobahn-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Autobahn API error: {0}")]
    Api(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for autobahn-core
pub type Result<T> = std::result::Result<T, Error>;
