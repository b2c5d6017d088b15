//! Types for bitFlyer REST API responses
//!
//! Field names match the wire format exactly. Every field is required: a body
//! that lacks one fails to decode instead of producing zero values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RestError, RestResult};

// ============================================================================
// API Error Envelope
// ============================================================================

/// Error body returned by bitFlyer on failure
///
/// ```json
/// {"status": -500, "error_message": "Key not found", "data": null}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// bitFlyer status code
    pub status: i64,
    /// Human readable message
    pub error_message: String,
}

// ============================================================================
// Account Types
// ============================================================================

/// A currency holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Currency code (e.g. "JPY", "BTC")
    pub currency_code: String,
    /// Total amount
    pub amount: Decimal,
    /// Amount available for trading or withdrawal
    pub available: Decimal,
}

/// Account balance: the assets returned by `/v1/me/getbalance`, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance {
    assets: Vec<Asset>,
}

impl Balance {
    /// Wrap a list of assets
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Find an asset by currency code
    ///
    /// Comparison ignores ASCII case and the first match wins.
    pub fn asset(&self, code: &str) -> RestResult<&Asset> {
        self.assets
            .iter()
            .find(|a| a.currency_code.eq_ignore_ascii_case(code))
            .ok_or_else(|| RestError::AssetNotFound(code.to_string()))
    }

    /// All assets in response order
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Number of assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the balance holds no assets
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// A trade fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    /// Execution ID
    pub id: i64,
    /// Child order ID
    pub child_order_id: String,
    /// "BUY" or "SELL"
    pub side: String,
    /// Price in integer currency units
    pub price: i64,
    /// Executed size
    pub size: Decimal,
    /// Commission in integer units
    pub commission: i64,
    /// Execution time
    pub exec_date: String,
    /// Acceptance ID of the child order
    pub child_order_acceptance_id: String,
}

impl Execution {
    /// Whether this fill was on the buy side
    pub fn is_buy(&self) -> bool {
        self.side.eq_ignore_ascii_case("BUY")
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Ticker snapshot for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Product code (e.g. "BTC_JPY")
    pub product_code: String,
    /// Snapshot time
    pub timestamp: String,
    /// Tick ID
    pub tick_id: i64,
    /// Best bid price
    pub best_bid: Decimal,
    /// Best ask price
    pub best_ask: Decimal,
    /// Size at best bid
    pub best_bid_size: Decimal,
    /// Size at best ask
    pub best_ask_size: Decimal,
    /// Total bid depth
    pub total_bid_depth: Decimal,
    /// Total ask depth
    pub total_ask_depth: Decimal,
    /// Last traded price
    pub ltp: Decimal,
    /// 24h volume
    pub volume: Decimal,
    /// 24h volume for this product
    pub volume_by_product: Decimal,
}

impl Ticker {
    /// Mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Decimal {
        (self.best_bid + self.best_ask) / Decimal::TWO
    }

    /// Spread between best ask and best bid
    pub fn spread(&self) -> Decimal {
        self.best_ask - self.best_bid
    }
}

// ============================================================================
// Funding Types
// ============================================================================

/// Fiat or crypto deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    /// Deposit ID
    pub id: i64,
    /// Order ID
    pub order_id: String,
    /// Currency code
    pub currency_code: String,
    /// Amount
    pub amount: Decimal,
    /// Status such as "PENDING" or "COMPLETED"
    pub status: String,
    /// Event time
    pub event_date: String,
}

/// On-chain transfer into the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coinin {
    /// Coin-in ID
    pub id: i64,
    /// Order ID
    pub order_id: String,
    /// Currency code
    pub currency_code: String,
    /// Amount
    pub amount: Decimal,
    /// Receiving address
    pub address: String,
    /// Transaction hash
    pub tx_hash: String,
    /// Status such as "PENDING" or "COMPLETED"
    pub status: String,
    /// Event time
    pub event_date: String,
}

// ============================================================================
// Collections
// ============================================================================

macro_rules! collection {
    ($(#[$meta:meta])* $name:ident, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Vec<$item>);

        impl $name {
            /// Wrap a list of records
            pub fn new(items: Vec<$item>) -> Self {
                Self(items)
            }

            /// Records in response order
            pub fn as_slice(&self) -> &[$item] {
                &self.0
            }

            /// Take the records
            pub fn into_inner(self) -> Vec<$item> {
                self.0
            }

            /// Number of records
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether there are no records
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }
    };
}

collection!(
    /// Deposits returned by `/v1/me/getdeposits`
    Deposits,
    Deposit
);
collection!(
    /// Coin-ins returned by `/v1/me/getcoinins`
    Coinins,
    Coinin
);
collection!(
    /// Executions returned by `/v1/me/getexecutions`
    Executions,
    Execution
);
