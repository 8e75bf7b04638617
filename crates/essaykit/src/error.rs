//! Error types for Essaykit

use thiserror::Error;

/// Errors that can occur while retrieving an essay
///
/// Every variant is produced at the fetch boundary; extraction and formatting
/// never fail. Network failures are distinguishable from content failures so
/// callers can surface the difference instead of a single opaque string.
#[derive(Debug, Error)]
pub enum EssayError {
    /// URL is missing
    #[error("Missing required parameter: url")]
    MissingUrl,

    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Request timed out waiting for first byte
    #[error("Request timed out: server did not respond within 10 seconds")]
    FirstByteTimeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    Connect(#[source] reqwest::Error),

    /// Other request error
    #[error("Request failed: {0}")]
    Request(String),

    /// Response carried a non-text content type
    #[error("Unsupported content type: {0}")]
    BinaryContent(String),
}

impl EssayError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EssayError::FirstByteTimeout
        } else if err.is_connect() {
            EssayError::Connect(err)
        } else {
            EssayError::Request(err.to_string())
        }
    }

    /// True when the failure happened in the transport rather than in the
    /// response content
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            EssayError::FirstByteTimeout | EssayError::Connect(_) | EssayError::Request(_)
        )
    }
}
