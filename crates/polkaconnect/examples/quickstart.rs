//! PolkaConnect Quickstart
//!
//! Connects a simulated wallet, reads a balance and lists open referenda.
//!
//! Run with:
//! ```bash
//! POLKACONNECT_API_KEY=... RUST_LOG=polkaconnect=debug \
//!     cargo run -p polkaconnect --example quickstart -- <address>
//! ```

use polkaconnect::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5".to_string());

    let config = ClientConfig::from_env();
    println!("Service: {}", config.base_url());
    let client = ApiClient::new(config)?;

    // Wallet
    println!("{}", connect_wallet("polkadot").await?);

    let balance = get_balance(&client, "polkadot", &address).await?;
    let raw = balance["balance"].as_str().unwrap_or("0");
    println!(
        "Balance of {}: {} DOT",
        format_address(&address),
        format_balance(raw, u32::from(Chain::Polkadot.decimals()))?
    );

    // Governance
    let proposals = get_governance_proposals(&client).await?;
    println!("{} open referenda", proposals.len());
    for proposal in proposals.iter().take(5) {
        println!("  #{} {}", proposal["id"], proposal["title"].as_str().unwrap_or("untitled"));
    }

    // Amounts going out are always in the smallest unit
    println!("1.5 DOT = {} planck", parse_amount_default("1.5")?);

    Ok(())
}
