//! Private account endpoints

use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{Balance, Executions};
use bitflyer_auth::Credentials;
use reqwest::Method;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    transport: &'a Transport,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
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

    /// Get account balance
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<Balance> {
        self.get("/v1/me/getbalance").await
    }

    /// Get trade executions
    ///
    /// Returns the most recent page as served by bitFlyer; no paging
    /// parameters are sent.
    #[instrument(skip(self))]
    pub async fn get_executions(&self) -> RestResult<Executions> {
        self.get("/v1/me/getexecutions").await
    }
}
