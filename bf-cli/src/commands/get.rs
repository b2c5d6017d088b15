//! `bf get <path>`: signed GET of an arbitrary path

use anyhow::{Context, Result};
use bitflyer_rest::BitflyerRestClient;

/// Fetch `path` and return the body exactly as received
pub async fn run(client: &BitflyerRestClient, path: &str) -> Result<String> {
    client
        .get_raw(path)
        .await
        .with_context(|| format!("failed to fetch {}", path))
}
