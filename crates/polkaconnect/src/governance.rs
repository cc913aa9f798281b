//! OpenGov referenda, voting summaries and vote submission.

use crate::utils::data_field;
use polkaconnect_client::ApiClient;
use polkaconnect_error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ============================================================================
// Vote Types
// ============================================================================

/// Side of a referendum vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    /// In favour
    Aye,
    /// Against
    Nay,
}

/// Conviction multiplier, sent on the wire as `0..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Conviction {
    /// 0.1x voting power, no lock
    #[default]
    None,
    /// 1x voting power
    Locked1x,
    /// 2x voting power
    Locked2x,
    /// 3x voting power
    Locked3x,
    /// 4x voting power
    Locked4x,
    /// 5x voting power
    Locked5x,
    /// 6x voting power
    Locked6x,
}

impl Conviction {
    /// All convictions from weakest to strongest
    pub const ALL: [Conviction; 7] = [
        Conviction::None,
        Conviction::Locked1x,
        Conviction::Locked2x,
        Conviction::Locked3x,
        Conviction::Locked4x,
        Conviction::Locked5x,
        Conviction::Locked6x,
    ];
}

impl From<Conviction> for u8 {
    fn from(conviction: Conviction) -> Self {
        conviction as u8
    }
}

impl TryFrom<u8> for Conviction {
    type Error = ConvictionOutOfRange;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Conviction::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ConvictionOutOfRange(value))
    }
}

/// A conviction outside `0..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvictionOutOfRange(pub u8);

impl fmt::Display for ConvictionOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conviction {} is outside 0..=6", self.0)
    }
}

impl std::error::Error for ConvictionOutOfRange {}

/// Body of `POST /api/governance/vote`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    /// Referendum index
    pub referendum_id: u64,
    /// Voting account
    pub wallet_address: String,
    /// Aye or nay
    pub vote: VoteDirection,
    /// Lock multiplier
    pub conviction: Conviction,
    /// Human-denominated balance committed to the vote
    pub balance: String,
}

impl VoteRequest {
    /// Creates a vote with no conviction
    pub fn new(
        referendum_id: u64,
        wallet_address: impl Into<String>,
        vote: VoteDirection,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            referendum_id,
            wallet_address: wallet_address.into(),
            vote,
            conviction: Conviction::None,
            balance: balance.into(),
        }
    }

    /// Sets the conviction
    pub fn with_conviction(mut self, conviction: Conviction) -> Self {
        self.conviction = conviction;
        self
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Lists active referenda.
///
/// Returns the `data` array of the response; a missing or `null` `data`
/// yields an empty list.
#[tracing::instrument(skip(client))]
pub async fn get_governance_proposals(client: &ApiClient) -> Result<Vec<Value>> {
    let response = client.get("/api/governance", &[]).await?;
    let proposals = data_field(&response)?;
    tracing::debug!(count = proposals.len(), "fetched governance proposals");
    Ok(proposals)
}

/// Fetches the voting summary, scoped to `address` when one is given.
///
/// An empty address is treated like no address.
#[tracing::instrument(skip(client))]
pub async fn get_governance_summary(client: &ApiClient, address: Option<&str>) -> Result<Value> {
    match address.filter(|a| !a.is_empty()) {
        Some(address) => {
            client
                .get("/api/governance/summary", &[("address", address)])
                .await
        }
        None => client.get("/api/governance/summary", &[]).await,
    }
}

/// Records a vote on a referendum.
#[tracing::instrument(skip(client), fields(referendum = vote.referendum_id))]
pub async fn submit_vote(client: &ApiClient, vote: &VoteRequest) -> Result<Value> {
    client.post("/api/governance/vote", vote).await
}
