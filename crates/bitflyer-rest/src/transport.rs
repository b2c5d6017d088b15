//! Signed request construction and JSON response decoding

use bitflyer_auth::{Credentials, RequestSigner};
use reqwest::{Client, Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::client::ClientConfig;
use crate::error::{RestError, RestResult};
use crate::types::ApiErrorBody;

/// HTTP transport bound to one API base URL
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: Client,
    base_url: String,
}

impl Transport {
    /// Create a transport from client configuration
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("bitflyer-rest/{}", env!("CARGO_PKG_VERSION")));

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a signed request for `method` and `path`
    ///
    /// `path` must begin with `/` and may carry a query string, which is
    /// part of the signed message.
    pub fn build_request(
        &self,
        credentials: &Credentials,
        method: Method,
        path: &str,
    ) -> RestResult<Request> {
        let signer = RequestSigner::new(credentials, method.as_str(), path)?;
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.http_client.request(method, &url);
        for (name, value) in signer.headers() {
            builder = builder.header(name, value);
        }

        builder
            .build()
            .map_err(|e| RestError::InvalidRequest(format!("{}: {}", url, e)))
    }

    /// Send a request and decode the JSON body into `T`
    ///
    /// The HTTP status does not decide success. A body that fails to decode
    /// as `T` is reported as [`RestError::Api`] when it is bitFlyer's error
    /// envelope and as [`RestError::Decode`] otherwise.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> RestResult<T> {
        let path = request_path(&request);
        let (status, body) = self.send(request).await?;

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => Ok(value),
            Err(source) => {
                if let Ok(api_error) = serde_json::from_slice::<ApiErrorBody>(&body) {
                    warn!(
                        "{} returned error {}: {}",
                        path, api_error.status, api_error.error_message
                    );
                    return Err(RestError::Api {
                        http_status: status.as_u16(),
                        status: api_error.status,
                        message: api_error.error_message,
                    });
                }

                warn!("Failed to decode response from {}: {}", path, source);
                Err(RestError::Decode { path, source })
            }
        }
    }

    /// Send a request and return the body as text without decoding
    pub async fn execute_raw(&self, request: Request) -> RestResult<String> {
        let (_, body) = self.send(request).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Send a request and read the whole body exactly once
    async fn send(&self, request: Request) -> RestResult<(StatusCode, Vec<u8>)> {
        debug!("{} {}", request.method(), request_path(&request));

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

fn request_path(request: &Request) -> String {
    let url = request.url();
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitflyer_auth::sign;

    fn transport() -> Transport {
        Transport::new(&ClientConfig::default().with_base_url("https://api.bitflyer.jp/")).unwrap()
    }

    #[test]
    fn test_build_request_sets_auth_headers() {
        let creds = Credentials::new("KEY", "SECRET").unwrap();
        let request = transport()
            .build_request(&creds, Method::GET, "/v1/me/getbalance")
            .unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.bitflyer.jp/v1/me/getbalance"
        );

        let headers = request.headers();
        assert_eq!(
            headers["content-type"],
            "application/json; charset=UTF-8"
        );
        assert_eq!(headers["access-key"], "KEY");

        let timestamp = headers["access-timestamp"].to_str().unwrap();
        assert!(timestamp.parse::<i64>().is_ok());
        assert_eq!(
            headers["access-sign"].to_str().unwrap(),
            sign("SECRET", timestamp, "GET", "/v1/me/getbalance")
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_query_string_is_signed() {
        let creds = Credentials::new("KEY", "SECRET").unwrap();
        let request = transport()
            .build_request(&creds, Method::GET, "/v1/ticker?product_code=ETH_JPY")
            .unwrap();

        assert_eq!(request_path(&request), "/v1/ticker?product_code=ETH_JPY");
        let timestamp = request.headers()["access-timestamp"].to_str().unwrap();
        assert_eq!(
            request.headers()["access-sign"].to_str().unwrap(),
            sign("SECRET", timestamp, "GET", "/v1/ticker?product_code=ETH_JPY")
        );
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let creds = Credentials::new("KEY", "SECRET").unwrap();
        let err = transport()
            .build_request(&creds, Method::GET, "v1/ticker")
            .unwrap_err();
        assert!(matches!(err, RestError::Auth(_)));
    }

    #[test]
    fn test_malformed_base_url_is_invalid_request() {
        let creds = Credentials::new("KEY", "SECRET").unwrap();
        let transport =
            Transport::new(&ClientConfig::default().with_base_url("not a url")).unwrap();
        let err = transport
            .build_request(&creds, Method::GET, "/v1/ticker")
            .unwrap_err();
        assert!(matches!(err, RestError::InvalidRequest(_)));
    }
}
