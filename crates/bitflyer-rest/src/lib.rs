//! REST API client for the bitFlyer Lightning exchange
//!
//! This crate provides read-only access to the account and market data
//! endpoints used by the `bf` command line tool.
//!
//! # Features
//!
//! - **Market Data**: Ticker
//! - **Account**: Balances, trade executions
//! - **Funding**: Deposit and coin-in history
//!
//! # Authentication
//!
//! Every request is signed with HMAC-SHA256 (see `bitflyer-auth`), including
//! the ticker which bitFlyer serves publicly.
//!
//! # Example
//!
//! ```no_run
//! use bitflyer_rest::{BitflyerRestClient, ClientConfig, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = BitflyerRestClient::new(creds, ClientConfig::default())?;
//!
//!     let balance = client.get_balance().await?;
//!     let jpy = balance.asset("JPY")?;
//!     println!("JPY: {}", jpy.amount);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use bitflyer_auth::Credentials;
pub use client::{BitflyerRestClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{RestError, RestResult};
pub use transport::Transport;

pub use types::{
    // Account
    Asset, Balance, Execution, Executions,
    // Market data
    Ticker,
    // Funding
    Coinin, Coinins, Deposit, Deposits,
    // Responses
    ApiErrorBody,
};

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
