//! Authentication for the bitFlyer Lightning REST API
//!
//! Private endpoints are authenticated with three headers:
//!
//! - `ACCESS-KEY` - the API key
//! - `ACCESS-TIMESTAMP` - Unix time in seconds
//! - `ACCESS-SIGN` - hex encoded HMAC-SHA256 of `timestamp + method + path`
//!
//! # Example
//!
//! ```no_run
//! use bitflyer_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let signer = RequestSigner::new(&creds, "GET", "/v1/me/getbalance")?;
//!
//!     for (name, value) in signer.headers() {
//!         println!("{name}: {value}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{Credentials, API_KEY_VAR, API_SECRET_VAR};
pub use error::{AuthError, AuthResult};
pub use signer::{sign, RequestSigner, CONTENT_TYPE};
