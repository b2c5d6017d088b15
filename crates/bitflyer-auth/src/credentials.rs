//! API credentials for bitFlyer private endpoints
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! The secret is only ever used locally to compute signatures; it is never sent.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{AuthError, AuthResult};

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "BITFLYER_API_KEY";

/// Environment variable holding the API secret
pub const API_SECRET_VAR: &str = "BITFLYER_API_SECRET";

/// API credentials for authenticated requests
pub struct Credentials {
    /// API key (sent as `ACCESS-KEY`)
    api_key: String,
    /// API secret (zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// Both values must be non-empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITFLYER_API_KEY` and `BITFLYER_API_SECRET`. A variable that is
    /// set to an empty string counts as unset.
    pub fn from_env() -> AuthResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create credentials using an arbitrary variable lookup
    ///
    /// The key is resolved before the secret, so a missing key is always the
    /// reported error when both are absent.
    pub fn from_lookup<F>(lookup: F) -> AuthResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AuthError::EnvVarNotSet(name.to_string()))
        };

        let api_key = fetch(API_KEY_VAR)?;
        let api_secret = fetch(API_SECRET_VAR)?;
        debug!("Loaded bitFlyer credentials");

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign `timestamp + method + path` with the API secret
    pub fn sign(&self, timestamp: &str, method: &str, path: &str) -> String {
        crate::signer::sign(self.api_secret.expose_secret(), timestamp, method, path)
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
