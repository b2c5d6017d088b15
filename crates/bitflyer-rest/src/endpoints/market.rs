//! Market data endpoints
//!
//! bitFlyer serves these publicly, but requests are still signed.

use crate::error::{RestError, RestResult};
use crate::transport::Transport;
use crate::types::Ticker;
use bitflyer_auth::Credentials;
use reqwest::Method;
use tracing::{debug, instrument};

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a Transport,
    credentials: &'a Credentials,
}

impl<'a> MarketEndpoints<'a> {
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

        debug!("Fetching {}", path);
        self.transport.execute(request).await
    }

    /// Get the ticker for the exchange's default product (BTC_JPY)
    #[instrument(skip(self))]
    pub async fn get_ticker(&self) -> RestResult<Ticker> {
        self.get("/v1/ticker").await
    }

    /// Get the ticker for a specific product
    ///
    /// # Arguments
    /// * `product_code` - Product (e.g., "ETH_JPY", "FX_BTC_JPY")
    ///
    /// Codes are ASCII letters, digits and `_`. Anything else is rejected
    /// before signing, since the query string is part of the signed message.
    #[instrument(skip(self))]
    pub async fn get_ticker_for(&self, product_code: &str) -> RestResult<Ticker> {
        if !is_product_code(product_code) {
            return Err(RestError::InvalidRequest(format!(
                "invalid product code: {:?}",
                product_code
            )));
        }

        let path = format!("/v1/ticker?product_code={}", product_code);
        self.get(&path).await
    }
}

fn is_product_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_code_charset() {
        assert!(is_product_code("BTC_JPY"));
        assert!(is_product_code("FX_BTC_JPY"));
        assert!(is_product_code("BTCJPY28MAR2025"));

        assert!(!is_product_code(""));
        assert!(!is_product_code("BTC JPY"));
        assert!(!is_product_code("BTC_JPY&count=1"));
        assert!(!is_product_code("BTC/JPY"));
        assert!(!is_product_code("ビットコイン"));
    }
}
