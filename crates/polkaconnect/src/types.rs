//! Typed views over service payloads.
//!
//! Feature functions return raw JSON. Callers that want shape validation
//! decode into these types with [`decode_as`].

use polkaconnect_error::{PolkaConnectError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decodes a JSON payload into `T`
pub fn decode_as<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| PolkaConnectError::Decode(e.to_string()))
}

// ============================================================================
// Governance
// ============================================================================

/// Lifecycle of a referendum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    /// Voting is open
    Active,
    /// Referendum passed
    Passed,
    /// Referendum failed
    Rejected,
}

/// A referendum as listed by `/api/governance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Referendum index
    pub id: u64,
    /// Short title
    pub title: String,
    /// Submitting account
    pub proposer: String,
    /// Current status
    pub status: ProposalStatus,
    /// Aye tally
    pub aye_votes: u64,
    /// Nay tally
    pub nay_votes: u64,
    /// End of the voting period (RFC 3339)
    pub deadline: String,
    /// Long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// OpenGov track
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
}

impl Proposal {
    /// Share of aye votes in `0.0..=1.0`, `None` before any vote
    pub fn approval(&self) -> Option<f64> {
        let total = self.aye_votes.checked_add(self.nay_votes)?;
        (total > 0).then(|| self.aye_votes as f64 / total as f64)
    }
}

// ============================================================================
// Network
// ============================================================================

/// Sync state of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Following the chain head
    Online,
    /// Catching up
    Syncing,
    /// Unreachable
    Offline,
}

/// Per-chain balance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainBalance {
    /// Chain identifier
    pub chain_id: String,
    /// Display name
    pub chain_name: String,
    /// Smallest-unit balance
    pub balance: String,
    /// Value in USD
    pub usd_value: String,
    /// Time of the last refresh
    pub last_updated: String,
    /// Current status
    pub status: NodeStatus,
    /// Height the balance was read at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
}

/// A node as listed by `/api/network`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkNode {
    /// Node identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Latest block seen
    pub block_height: u64,
    /// Uptime percentage
    pub uptime: f64,
    /// Current status
    pub status: NodeStatus,
    /// RPC URL
    pub rpc_endpoint: String,
}
