//! bf - bitFlyer CLI
//!
//! # Usage
//!
//! ```bash
//! export BITFLYER_API_KEY=...
//! export BITFLYER_API_SECRET=...
//!
//! # Total assets in JPY
//! bf status
//!
//! # Deposit, coin-in and execution history
//! bf history
//!
//! # Raw signed GET
//! bf get /v1/me/getchildorders?product_code=BTC_JPY
//! ```
//!
//! Output is a single JSON line on stdout. Logs go to stderr (`RUST_LOG`).

use anyhow::{Context, Result};
use bitflyer_cli::cli::Cli;
use bitflyer_cli::{commands, logging};
use bitflyer_rest::{BitflyerRestClient, Credentials};
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(&cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String> {
    // Credentials are resolved before any network access.
    let credentials = Credentials::from_env().context("failed to load credentials")?;

    let client = BitflyerRestClient::new(credentials, cli.client_config())
        .context("failed to create HTTP client")?;

    commands::execute(&cli.command, &client).await
}
