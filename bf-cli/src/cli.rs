//! Command line surface

use bitflyer_rest::{ClientConfig, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("bf/", env!("CARGO_PKG_VERSION"));

/// Path fetched by `bf get` when none is given
pub const DEFAULT_GET_PATH: &str = "/v1/me/getbalance";

#[derive(Debug, Parser)]
#[command(name = "bf")]
#[command(about = "bitFlyer CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "BITFLYER_API_ENDPOINT", default_value = DEFAULT_BASE_URL, global = true)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print account status
    Status,

    /// Print history for deposits and trades
    History,

    /// Print the raw response of a signed GET request
    Get {
        /// API path, including any query string
        #[arg(default_value = DEFAULT_GET_PATH)]
        path: String,
    },
}

impl Cli {
    /// Client configuration from the global options
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_base_url(self.endpoint.clone())
            .with_timeout(self.timeout)
            .with_user_agent(USER_AGENT)
    }
}
