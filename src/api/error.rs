//! Errors raised while talking to the user resource.

use thiserror::Error;

/// Failures of a single resource call.
///
/// The store flattens every variant into its `Display` text; the variants
/// exist so callers outside the store (the CLI, tests) can tell them apart.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Request never produced a response (DNS, connect, reset, ...)
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Resource answered with a non-success status
    #[error("Error: {status} - {reason}")]
    Status { status: u16, reason: String },

    /// Response body was not the expected JSON
    #[error("Invalid response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(status: reqwest::StatusCode) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Client { .. } => "client",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }
}
