//! # PolkaConnect - Multi-Chain Wallet Service SDK
//!
//! PolkaConnect is a thin client for the PolkaConnect service: balances,
//! cross-chain swaps and XCM transfers, OpenGov referenda, network health and
//! staking analytics. Every network call goes through one shared
//! [`ApiClient`] and returns the service's JSON payload untouched.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`wallet`] | Wallet connection, balances, asset listings |
//! | [`swap`] | Cross-chain token swaps |
//! | [`transfer`] | XCM transfers |
//! | [`governance`] | Referenda, voting summary, vote submission |
//! | [`network`] | Node health and XCM activity |
//! | [`staking`] | Staking analytics |
//! | [`utils`] | Amount codec and address display |
//! | [`types`] | Optional typed views over service payloads |
//!
//! ## Example
//!
//! ```ignore
//! use polkaconnect::prelude::*;
//!
//! let client = ApiClient::new(ClientConfig::from_env())?;
//!
//! let balance = get_balance(&client, "polkadot", "15oF4uVJ...").await?;
//! let raw = parse_amount("1.5", DEFAULT_DECIMALS)?;
//! let receipt = swap_tokens(&client, "DOT", "ETH", 1.5).await?;
//!
//! for proposal in get_governance_proposals(&client).await? {
//!     println!("{}", proposal["title"]);
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod governance;
pub mod network;
pub mod staking;
pub mod swap;
pub mod transfer;
pub mod types;
pub mod utils;
pub mod wallet;

// ============================================================================
// Core re-exports
// ============================================================================

pub use polkaconnect_client as client;
pub use polkaconnect_error as error;
pub use polkaconnect_traits as traits;

pub use polkaconnect_client::{ApiClient, ClientConfig, HttpClientConfig, DEFAULT_BASE_URL};
pub use polkaconnect_error::{ErrorCode, PolkaConnectError, Result};
pub use polkaconnect_traits::{Chain, ChainInfo, ChainKind, WalletConnection, WalletConnector};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::governance::{
        get_governance_proposals, get_governance_summary, submit_vote, Conviction, VoteDirection,
        VoteRequest,
    };
    pub use crate::network::{get_network_status, get_xcm_activity};
    pub use crate::staking::get_staking_analytics;
    pub use crate::swap::{swap_tokens, SwapRequest};
    pub use crate::transfer::{transfer_tokens, TransferRequest};
    pub use crate::utils::{
        format_address, format_address_with, format_balance, format_balance_default,
        parse_amount, parse_amount_default, HumanAmount, DEFAULT_DECIMALS,
    };
    pub use crate::wallet::{connect_wallet, connect_wallet_with, get_assets, get_balance};

    pub use polkaconnect_client::{ApiClient, ClientConfig};
    pub use polkaconnect_error::{PolkaConnectError, Result};
    pub use polkaconnect_traits::prelude::*;
    pub use serde_json::Value;
}

// ============================================================================
// Version information
// ============================================================================

/// Returns the PolkaConnect SDK version
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_BASE_URL);
    }
}
