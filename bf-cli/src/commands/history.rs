//! `bf history`: deposits, coin-ins and executions

use anyhow::{Context, Result};
use bitflyer_rest::{BitflyerRestClient, Coinins, Deposits, Executions};
use serde::Serialize;
use tracing::info;

/// Output of `bf history`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryReport {
    pub deposits: Deposits,
    pub coinins: Coinins,
    pub executions: Executions,
}

/// Fetch all three histories
///
/// A failure in any of the three fetches fails the whole command; there is
/// no partial output.
pub async fn run(client: &BitflyerRestClient) -> Result<HistoryReport> {
    let deposits = client
        .get_deposits()
        .await
        .context("failed to fetch deposits")?;

    let coinins = client
        .get_coinins()
        .await
        .context("failed to fetch coinins")?;

    let executions = client
        .get_executions()
        .await
        .context("failed to fetch executions")?;

    info!(
        "Fetched {} deposits, {} coinins, {} executions",
        deposits.len(),
        coinins.len(),
        executions.len()
    );

    Ok(HistoryReport {
        deposits,
        coinins,
        executions,
    })
}
