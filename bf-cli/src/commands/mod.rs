//! Top-level command actions
//!
//! Each action issues its API calls one after another and returns a value
//! ready to print. These are the only places that decide an error is fatal.

pub mod get;
pub mod history;
pub mod status;

use anyhow::Result;
use bitflyer_rest::BitflyerRestClient;

use crate::cli::Command;

/// Run a command and render its output line
pub async fn execute(command: &Command, client: &BitflyerRestClient) -> Result<String> {
    match command {
        Command::Status => {
            let report = status::run(client).await?;
            Ok(serde_json::to_string(&report)?)
        }
        Command::History => {
            let report = history::run(client).await?;
            Ok(serde_json::to_string(&report)?)
        }
        Command::Get { path } => get::run(client, path).await,
    }
}
