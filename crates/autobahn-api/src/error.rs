//! Error types for autobahn-api

use thiserror::Error;

/// autobahn-api error type
///
/// Keeps the three failure kinds of a fetch distinct: transport errors,
/// non-2xx responses, and bodies that do not match the expected schema.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("response validation failed for {url}: {source}")]
    Validation {
        url: String,
        source: serde_json::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
