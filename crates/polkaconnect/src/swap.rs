//! Cross-chain token swaps.

use polkaconnect_client::ApiClient;
use polkaconnect_error::{PolkaConnectError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/swap`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Token sold
    pub from: String,
    /// Token bought
    pub to: String,
    /// Human-denominated amount of `from`
    pub amount: f64,
}

impl SwapRequest {
    /// Creates a swap request
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Swaps `amount` of token `from` into token `to`.
///
/// The call is made once; a failed swap is never resubmitted.
#[tracing::instrument(skip(client))]
pub async fn swap_tokens(client: &ApiClient, from: &str, to: &str, amount: f64) -> Result<Value> {
    if !amount.is_finite() {
        return Err(PolkaConnectError::InvalidAmount(format!("{} is not finite", amount)));
    }
    client.post("/api/swap", &SwapRequest::new(from, to, amount)).await
}
