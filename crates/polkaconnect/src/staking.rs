//! Staking analytics.

use polkaconnect_client::ApiClient;
use polkaconnect_error::{PolkaConnectError, Result};
use serde_json::Value;

/// Fetches staking analytics, projecting rewards for `bonded_amount` when given.
#[tracing::instrument(skip(client))]
pub async fn get_staking_analytics(client: &ApiClient, bonded_amount: Option<f64>) -> Result<Value> {
    match bonded_amount {
        Some(amount) if !amount.is_finite() => Err(PolkaConnectError::InvalidAmount(format!(
            "{} is not finite",
            amount
        ))),
        Some(amount) => {
            let amount = amount.to_string();
            client
                .get("/api/staking/analytics", &[("bondedAmount", amount.as_str())])
                .await
        }
        None => client.get("/api/staking/analytics", &[]).await,
    }
}
