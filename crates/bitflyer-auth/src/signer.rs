//! Request signing
//!
//! bitFlyer signature algorithm:
//! 1. message = timestamp + method + path (path includes any query string)
//! 2. HMAC-SHA256(api_secret, message)
//! 3. Lowercase hex encode
//!
//! Only GET requests without a body are issued by this client, so the body
//! part of the message is always empty.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Content type sent with every signed request
pub const CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Compute the hex encoded HMAC-SHA256 signature for a request
///
/// This is a pure function of its inputs.
pub fn sign(secret: &str, timestamp: &str, method: &str, path: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.as_bytes());
    mac.update(method.as_bytes());
    mac.update(path.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Request signer for building authenticated requests
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    timestamp: String,
    signature: String,
}

impl<'a> RequestSigner<'a> {
    /// Sign `method` + `path` using the current Unix time in seconds
    pub fn new(credentials: &'a Credentials, method: &str, path: &str) -> AuthResult<Self> {
        Self::with_timestamp(credentials, Utc::now().timestamp().to_string(), method, path)
    }

    /// Sign `method` + `path` with an explicit timestamp
    pub fn with_timestamp(
        credentials: &'a Credentials,
        timestamp: impl Into<String>,
        method: &str,
        path: &str,
    ) -> AuthResult<Self> {
        if !path.starts_with('/') {
            return Err(AuthError::InvalidPath(path.to_string()));
        }

        let timestamp = timestamp.into();
        let signature = credentials.sign(&timestamp, method, path);

        Ok(Self {
            credentials,
            timestamp,
            signature,
        })
    }

    /// Get the timestamp used in the signature
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the hex signature
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Headers to attach to the request, in the order they are sent
    pub fn headers(&self) -> [(&'static str, &str); 4] {
        [
            ("content-type", CONTENT_TYPE),
            ("ACCESS-KEY", self.api_key()),
            ("ACCESS-TIMESTAMP", self.timestamp()),
            ("ACCESS-SIGN", self.signature()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("API_KEY", "secret").unwrap()
    }

    #[test]
    fn test_known_signature() {
        let signature = sign("secret", "1700000000", "GET", "/v1/me/getbalance");
        assert_eq!(
            signature,
            "79587a758aa701507d18db547f65f26852404ed7ed2a6a536f4229c9f0eec306"
        );
    }

    #[test]
    fn test_message_is_plain_concatenation() {
        // HMAC-SHA256("key", "The quick brown fox jumps over the lazy dog")
        let signature = sign("key", "The quick", " brown fox", " jumps over the lazy dog");
        assert_eq!(
            signature,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn test_signing_consistency() {
        let a = sign("secret", "1700000000", "GET", "/v1/ticker");
        let b = sign("secret", "1700000000", "GET", "/v1/ticker");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_sensitivity() {
        let base = sign("secret", "1700000000", "GET", "/v1/ticker");
        assert_ne!(base, sign("secret2", "1700000000", "GET", "/v1/ticker"));
        assert_ne!(base, sign("secret", "1700000001", "GET", "/v1/ticker"));
        assert_ne!(base, sign("secret", "1700000000", "POST", "/v1/ticker"));
        assert_ne!(base, sign("secret", "1700000000", "GET", "/v1/me/getbalance"));
    }

    #[test]
    fn test_signer_headers() {
        let creds = creds();
        let signer =
            RequestSigner::with_timestamp(&creds, "1700000000", "GET", "/v1/me/getbalance")
                .unwrap();

        let headers = signer.headers();
        assert_eq!(headers[0], ("content-type", CONTENT_TYPE));
        assert_eq!(headers[1], ("ACCESS-KEY", "API_KEY"));
        assert_eq!(headers[2], ("ACCESS-TIMESTAMP", "1700000000"));
        assert_eq!(
            headers[3],
            (
                "ACCESS-SIGN",
                "79587a758aa701507d18db547f65f26852404ed7ed2a6a536f4229c9f0eec306"
            )
        );
    }

    #[test]
    fn test_signer_uses_current_unix_seconds() {
        let creds = creds();
        let before = Utc::now().timestamp();
        let signer = RequestSigner::new(&creds, "GET", "/v1/ticker").unwrap();
        let after = Utc::now().timestamp();

        let ts: i64 = signer.timestamp().parse().unwrap();
        assert!(ts >= before && ts <= after);
        assert_eq!(
            signer.signature(),
            sign("secret", signer.timestamp(), "GET", "/v1/ticker")
        );
    }

    #[test]
    fn test_rejects_relative_path() {
        let creds = creds();
        let err = RequestSigner::new(&creds, "GET", "v1/ticker").unwrap_err();
        assert!(matches!(err, AuthError::InvalidPath(_)));
    }
}
