//! `bf status`: total account value in JPY

use anyhow::{Context, Result};
use bitflyer_rest::{Asset, Balance, BitflyerRestClient, RestError, RestResult, Ticker};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

/// Output of `bf status`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    /// JPY balance plus the BTC balance valued at the best ask
    pub total_assets: Decimal,
}

/// Value the account in JPY: `JPY.amount + best_ask * BTC.amount`
///
/// Both JPY and BTC must be present in the balance. A total outside the
/// range of [`Decimal`] is an error, not a panic.
pub fn total_assets(balance: &Balance, ticker: &Ticker) -> RestResult<Decimal> {
    let (jpy, btc) = holdings(balance)?;

    ticker
        .best_ask
        .checked_mul(btc.amount)
        .and_then(|btc_value| jpy.amount.checked_add(btc_value))
        .ok_or_else(|| {
            RestError::Overflow(format!(
                "{} JPY + {} BTC at {}",
                jpy.amount, btc.amount, ticker.best_ask
            ))
        })
}

fn holdings(balance: &Balance) -> RestResult<(&Asset, &Asset)> {
    Ok((balance.asset("JPY")?, balance.asset("BTC")?))
}

/// Fetch balance and ticker and value the account
///
/// The ticker is only fetched once both assets are known to be present.
pub async fn run(client: &BitflyerRestClient) -> Result<StatusReport> {
    let balance = client
        .get_balance()
        .await
        .context("failed to fetch balance")?;

    holdings(&balance).context("balance lookup failed")?;

    let ticker = client
        .get_ticker()
        .await
        .context("failed to fetch ticker")?;

    let total_assets =
        total_assets(&balance, &ticker).context("failed to compute total assets")?;
    info!("Total assets: {}", total_assets);

    Ok(StatusReport { total_assets })
}
