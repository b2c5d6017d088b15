//! API endpoint implementations

pub mod account;
pub mod funding;
pub mod market;

pub use account::AccountEndpoints;
pub use funding::FundingEndpoints;
pub use market::MarketEndpoints;
