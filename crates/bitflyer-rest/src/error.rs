//! Error types for REST API operations

use bitflyer_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (connection, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response body did not match the expected shape
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        /// Request path
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// API returned its error envelope
    #[error("API error {status} (HTTP {http_status}): {message}")]
    Api {
        /// HTTP status code of the response
        http_status: u16,
        /// bitFlyer status code (negative on failure)
        status: i64,
        /// Message from the API
        message: String,
    },

    /// Currency code absent from a balance
    #[error("{0} is missing")]
    AssetNotFound(String),

    /// Arithmetic on decoded amounts left the range of `Decimal`
    #[error("Decimal overflow: {0}")]
    Overflow(String),

    /// Credentials or signing failure
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

impl RestError {
    /// Check if repeating the request could succeed
    ///
    /// The client never retries on its own; this is for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout(_) => true,
            Self::Api { http_status, .. } => *http_status >= 500 || *http_status == 429,
            _ => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
