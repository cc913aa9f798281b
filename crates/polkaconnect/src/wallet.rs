//! Wallet connection, balances and asset listings.

use polkaconnect_client::ApiClient;
use polkaconnect_error::{PolkaConnectError, Result};
use polkaconnect_traits::{Chain, SimulatedConnector, WalletConnection, WalletConnector};
use serde_json::Value;

/// Connects to a wallet on `chain` through the built-in simulated connector.
///
/// Returns a confirmation message naming the chain. Only `polkadot` and
/// `ethereum` are accepted; anything else fails with
/// [`PolkaConnectError::UnsupportedChain`].
#[tracing::instrument]
pub async fn connect_wallet(chain: &str) -> Result<String> {
    connect_wallet_with(&SimulatedConnector, chain)
        .await
        .map(|connection| connection.message)
}

/// Connects to a wallet on `chain` through the given connector.
#[tracing::instrument(skip(connector))]
pub async fn connect_wallet_with<C>(connector: &C, chain: &str) -> Result<WalletConnection>
where
    C: WalletConnector + ?Sized,
{
    let chain: Chain = chain.parse()?;
    if !connector.supported_chains().contains(&chain) {
        return Err(PolkaConnectError::UnsupportedChain(chain.to_string()));
    }

    let connection = connector.connect(chain).await?;
    tracing::info!(chain = %connection.chain, accounts = connection.accounts.len(), "wallet connected");
    Ok(connection)
}

/// Fetches the balance of `address` on `chain`.
///
/// `chain` is forwarded as-is; the service decides what it supports.
#[tracing::instrument(skip(client))]
pub async fn get_balance(client: &ApiClient, chain: &str, address: &str) -> Result<Value> {
    client
        .get("/api/balance", &[("chain", chain), ("address", address)])
        .await
}

/// Lists the assets held by `address` across every tracked chain.
#[tracing::instrument(skip(client))]
pub async fn get_assets(client: &ApiClient, address: &str) -> Result<Value> {
    client
        .get(&format!("/api/assets/{}", encode_path_segment(address)), &[])
        .await
}

fn encode_path_segment(segment: &str) -> String {
    // form encoding writes spaces as '+' and escapes literal '+' as %2B
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
