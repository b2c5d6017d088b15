//! Funding history endpoints

use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{Coinins, Deposits};
use bitflyer_auth::Credentials;
use reqwest::Method;
use tracing::{debug, instrument};

/// Funding endpoints for deposit history
pub struct FundingEndpoints<'a> {
    transport: &'a Transport,
    credentials: &'a Credentials,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(transport: &'a Transport, credentials: &'a Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Make an authenticated GET request
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        let request = self
            .transport
            .build_request(self.credentials, Method::GET, path)?;

        debug!("Making authenticated request to {}", path);
        self.transport.execute(request).await
    }

    /// Get fiat and crypto deposits
    #[instrument(skip(self))]
    pub async fn get_deposits(&self) -> RestResult<Deposits> {
        self.get("/v1/me/getdeposits").await
    }

    /// Get on-chain coin-ins
    #[instrument(skip(self))]
    pub async fn get_coinins(&self) -> RestResult<Coinins> {
        self.get("/v1/me/getcoinins").await
    }
}
