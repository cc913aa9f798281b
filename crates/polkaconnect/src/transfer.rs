//! XCM transfers between chains.

use polkaconnect_client::ApiClient;
use polkaconnect_error::{PolkaConnectError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/transfer/xcm`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Source chain
    pub from_chain: String,
    /// Destination chain
    pub to_chain: String,
    /// Recipient address on the destination chain
    pub address: String,
    /// Human-denominated amount
    pub amount: f64,
}

impl TransferRequest {
    /// Creates a transfer request
    pub fn new(
        from_chain: impl Into<String>,
        to_chain: impl Into<String>,
        address: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            from_chain: from_chain.into(),
            to_chain: to_chain.into(),
            address: address.into(),
            amount,
        }
    }
}

/// Sends `amount` from `from_chain` to `address` on `to_chain` over XCM.
#[tracing::instrument(skip(client))]
pub async fn transfer_tokens(
    client: &ApiClient,
    from_chain: &str,
    to_chain: &str,
    address: &str,
    amount: f64,
) -> Result<Value> {
    if !amount.is_finite() {
        return Err(PolkaConnectError::InvalidAmount(format!("{} is not finite", amount)));
    }
    let request = TransferRequest::new(from_chain, to_chain, address, amount);
    client.post("/api/transfer/xcm", &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transfer_request_wire_format() {
        let body = serde_json::to_value(TransferRequest::new("polkadot", "moonbeam", "0xabc", 1.0))
            .unwrap();
        assert_eq!(
            body,
            json!({"fromChain": "polkadot", "toChain": "moonbeam", "address": "0xabc", "amount": 1.0})
        );
    }

    #[test]
    fn test_transfer_request_roundtrip_from_service_json() {
        let request: TransferRequest = serde_json::from_value(json!({
            "fromChain": "polkadot",
            "toChain": "astar",
            "address": "5Grw...",
            "amount": 3
        }))
        .unwrap();
        assert_eq!(request.to_chain, "astar");
        assert_eq!(request.amount, 3.0);
    }
}
