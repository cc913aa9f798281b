//! Node health and cross-chain message activity.

use polkaconnect_client::ApiClient;
use polkaconnect_error::Result;
use serde_json::Value;

/// Fetches block height, uptime and status of every tracked node.
///
/// The response is an envelope whose `data` array holds the nodes; see
/// [`crate::types::NetworkNode`] for a typed view.
#[tracing::instrument(skip(client))]
pub async fn get_network_status(client: &ApiClient) -> Result<Value> {
    client.get("/api/network", &[]).await
}

/// Fetches recent XCM channel activity.
#[tracing::instrument(skip(client))]
pub async fn get_xcm_activity(client: &ApiClient) -> Result<Value> {
    client.get("/api/network/xcm", &[]).await
}
