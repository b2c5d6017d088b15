//! Error types for authentication operations

/// Errors that can occur while loading credentials or signing requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set (or set to an empty string)
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Request path cannot be signed
    #[error("Invalid request path {0:?}: must begin with '/'")]
    InvalidPath(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
