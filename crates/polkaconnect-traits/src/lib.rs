//! # PolkaConnect Traits
//!
//! The chain model shared by the PolkaConnect crates and the capability
//! interface for wallet connection.
//!
//! ## Core Items
//!
//! - [`Chain`] - Chains a wallet can be connected to
//! - [`ChainInfo`] - Static metadata (symbol, decimals, VM kind) per chain
//! - [`WalletConnector`] - Capability trait for wallet-extension bridges
//! - [`SimulatedConnector`] - Default connector that only confirms the chain
//!
//! A real extension bridge (Polkadot.js, MetaMask) implements
//! [`WalletConnector`] and is handed to the SDK in place of the simulated one.
//!
//! ## Example
//!
//! ```ignore
//! use polkaconnect_traits::prelude::*;
//!
//! async fn connect<C: WalletConnector>(connector: &C) -> WalletResult<WalletConnection> {
//!     connector.connect(Chain::Polkadot).await
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use polkaconnect_error::PolkaConnectError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, PolkaConnectError>;

/// Virtual machine family of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainKind {
    /// Substrate-based chain
    Substrate,
    /// EVM chain
    Evm,
}

/// Static metadata about a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    /// Identifier used on the wire (e.g., "polkadot")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Native token symbol
    pub symbol: &'static str,
    /// Decimal places of the native token
    pub decimals: u8,
    /// VM family
    pub kind: ChainKind,
}

/// Chains a wallet can be connected to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Polkadot relay chain
    Polkadot,
    /// Ethereum mainnet
    Ethereum,
}

impl Chain {
    /// All supported chains
    pub const ALL: [Chain; 2] = [Chain::Polkadot, Chain::Ethereum];

    /// Returns the wire identifier of the chain
    pub fn as_str(&self) -> &'static str {
        self.info().id
    }

    /// Returns static metadata for the chain
    pub fn info(&self) -> ChainInfo {
        match self {
            Chain::Polkadot => ChainInfo {
                id: "polkadot",
                name: "Polkadot",
                symbol: "DOT",
                decimals: 10,
                kind: ChainKind::Substrate,
            },
            Chain::Ethereum => ChainInfo {
                id: "ethereum",
                name: "Ethereum",
                symbol: "ETH",
                decimals: 18,
                kind: ChainKind::Evm,
            },
        }
    }

    /// Returns the native token's decimal places
    pub fn decimals(&self) -> u8 {
        self.info().decimals
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = PolkaConnectError;

    /// Exact, case-sensitive match on the wire identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|chain| chain.as_str() == s)
            .ok_or_else(|| PolkaConnectError::UnsupportedChain(s.to_string()))
    }
}

/// Outcome of a wallet connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnection {
    /// Connected chain
    pub chain: Chain,
    /// Accounts exposed by the wallet (empty when simulated)
    pub accounts: Vec<String>,
    /// Human-readable confirmation
    pub message: String,
}

/// Capability interface for wallet-extension bridges.
///
/// Implementations own whatever handshake the extension needs; the SDK only
/// sees the resulting [`WalletConnection`].
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Connects to a wallet on the given chain
    async fn connect(&self, chain: Chain) -> WalletResult<WalletConnection>;

    /// Returns the chains this connector can handle
    fn supported_chains(&self) -> &[Chain] {
        &Chain::ALL
    }
}

/// Connector that performs no handshake and confirms the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedConnector;

#[async_trait]
impl WalletConnector for SimulatedConnector {
    async fn connect(&self, chain: Chain) -> WalletResult<WalletConnection> {
        tracing::debug!(chain = %chain, "simulated wallet connection");
        Ok(WalletConnection {
            chain,
            accounts: Vec::new(),
            message: format!("Simulated connection to {} wallet", chain),
        })
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Chain, ChainInfo, ChainKind, SimulatedConnector, WalletConnection, WalletConnector,
        WalletResult,
    };
}
