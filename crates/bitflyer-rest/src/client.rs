//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints};
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{Balance, Coinins, Deposits, Executions, Ticker};
use bitflyer_auth::Credentials;
use reqwest::Method;
use tracing::{info, instrument};

/// bitFlyer Lightning API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.bitflyer.jp";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// bitFlyer REST API client
///
/// Every request is signed with the credentials the client was built with.
/// Calls are independent: each one builds its own request and decodes into a
/// fresh value.
///
/// # Example
///
/// ```no_run
/// use bitflyer_rest::{BitflyerRestClient, ClientConfig, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = BitflyerRestClient::new(creds, ClientConfig::default().with_timeout(10))?;
///
///     let ticker = client.get_ticker().await?;
///     println!("best ask: {}", ticker.best_ask);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitflyerRestClient {
    transport: Transport,
    credentials: Credentials,
}

impl BitflyerRestClient {
    /// Create a new client
    pub fn new(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let transport = Transport::new(&config)?;

        info!("Created bitFlyer REST client for {}", transport.base_url());

        Ok(Self {
            transport,
            credentials,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.transport, &self.credentials)
    }

    /// Get account balance
    pub async fn get_balance(&self) -> RestResult<Balance> {
        self.account().get_balance().await
    }

    /// Get trade executions
    pub async fn get_executions(&self) -> RestResult<Executions> {
        self.account().get_executions().await
    }

    // ========================================================================
    // Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.transport, &self.credentials)
    }

    /// Get the default product ticker
    pub async fn get_ticker(&self) -> RestResult<Ticker> {
        self.market().get_ticker().await
    }

    /// Get the ticker for a product code
    pub async fn get_ticker_for(&self, product_code: &str) -> RestResult<Ticker> {
        self.market().get_ticker_for(product_code).await
    }

    // ========================================================================
    // Funding Endpoints
    // ========================================================================

    /// Get funding endpoints
    pub fn funding(&self) -> FundingEndpoints<'_> {
        FundingEndpoints::new(&self.transport, &self.credentials)
    }

    /// Get deposits
    pub async fn get_deposits(&self) -> RestResult<Deposits> {
        self.funding().get_deposits().await
    }

    /// Get coin-ins
    pub async fn get_coinins(&self) -> RestResult<Coinins> {
        self.funding().get_coinins().await
    }

    // ========================================================================
    // Raw Access
    // ========================================================================

    /// Signed GET of any path, returning the body undecoded
    ///
    /// # Arguments
    /// * `path` - Path with optional query string (e.g., "/v1/me/getpositions?product_code=FX_BTC_JPY")
    #[instrument(skip(self))]
    pub async fn get_raw(&self, path: &str) -> RestResult<String> {
        let request = self
            .transport
            .build_request(&self.credentials, Method::GET, path)?;
        self.transport.execute_raw(request).await
    }
}

impl std::fmt::Debug for BitflyerRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitflyerRestClient")
            .field("base_url", &self.base_url())
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("test_key_abcdef", "test_secret").unwrap()
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:8080")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_default_config_targets_bitflyer() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.bitflyer.jp");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client =
            BitflyerRestClient::new(creds(), ClientConfig::new().with_base_url("http://localhost/"))
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost");
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = BitflyerRestClient::new(creds(), ClientConfig::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("api.bitflyer.jp"));
        assert!(!debug.contains("test_secret"));
    }
}
