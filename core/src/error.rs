//! Error types for talking to the file server.
//!
//! - [`ClientError`] - Request, response and browser API failures
//! - [`ConfigError`] - Invalid file server configuration
//!
//! [`ClientError`] is `Clone` so it can be carried by reactive resources
//! in the frontend; foreign errors are therefore captured as strings.

use thiserror::Error;

// =============================================================================
// Client Errors
// =============================================================================

/// Errors from requests against the file server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A browser API refused to build or send the request.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors in the file server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Base URL is neither a path nor an http(s) URL.
    #[error("Invalid FILE_SERVER_API base URL: {0:?}")]
    InvalidBaseUrl(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for file server requests.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
