//! # PolkaConnect Testing Infrastructure
//!
//! Testing utilities for the PolkaConnect SDK:
//! - A mock PolkaConnect backend built on `wiremock`
//! - Canned service payloads
//! - Edge case addresses and amounts
//! - Property-based testing strategies
//!
//! ## Usage
//!
//! ```rust,ignore
//! use polkaconnect_testing::*;
//!
//! let backend = MockBackend::start().await;
//! backend.expect_json("POST", "/api/swap", 500, json!({"error": "boom"}), 1).await;
//!
//! let err = swap_tokens(&backend.client(), "DOT", "ETH", 1.0).await.unwrap_err();
//! // call count is verified when `backend` is dropped
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use polkaconnect_client::{ApiClient, ClientConfig};
use proptest::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Mock Backend
// ============================================================================

/// An in-process PolkaConnect service.
///
/// Expectations registered with [`MockBackend::expect_json`] are verified
/// when the backend is dropped.
pub struct MockBackend {
    server: MockServer,
}

impl MockBackend {
    /// Starts a mock server on a random local port
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Returns the underlying wiremock server for custom matchers
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Returns the base URL of the mock service
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Returns a client pointed at the mock service
    pub fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig::new(self.uri()))
            .expect("mock backend URI is a valid base URL")
    }

    /// Returns a client pointed at the mock service that sends an API key
    pub fn client_with_api_key(&self, api_key: &str) -> ApiClient {
        ApiClient::new(ClientConfig::new(self.uri()).with_api_key(api_key))
            .expect("mock backend URI is a valid base URL")
    }

    /// Answers `method path` with a JSON body, any number of times
    pub async fn respond_json(&self, http_method: &str, endpoint: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answers `method path` with a JSON body and expects exactly `times` calls
    pub async fn expect_json(
        &self,
        http_method: &str,
        endpoint: &str,
        status: u16,
        body: Value,
        times: u64,
    ) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(times)
            .named(format!("{} {}", http_method, endpoint))
            .mount(&self.server)
            .await;
    }

    /// Returns how many requests reached `endpoint`
    pub async fn calls_to(&self, endpoint: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == endpoint)
            .count()
    }

    /// Returns the decoded JSON bodies of requests that reached `endpoint`
    pub async fn bodies_sent_to(&self, endpoint: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == endpoint)
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}

// ============================================================================
// Canned Payloads
// ============================================================================

/// Service payloads shaped like the live PolkaConnect API
pub struct Fixtures;

impl Fixtures {
    /// A referendum as returned inside `/api/governance`'s `data` array
    pub fn proposal(id: u64) -> Value {
        json!({
            "id": id,
            "title": format!("Referendum #{}", id),
            "proposer": "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5",
            "status": "active",
            "ayeVotes": 1200,
            "nayVotes": 300,
            "deadline": "2026-11-01T00:00:00Z",
            "track": "treasurer"
        })
    }

    /// `/api/governance` envelope with `count` proposals
    pub fn governance(count: u64) -> Value {
        json!({
            "success": true,
            "data": (1..=count).map(Self::proposal).collect::<Vec<_>>(),
            "cached": false
        })
    }

    /// `/api/balance` payload
    pub fn balance(chain: &str) -> Value {
        json!({
            "chainId": chain,
            "chainName": chain,
            "balance": "15000000000",
            "usdValue": "10.50",
            "lastUpdated": "2026-10-01T12:00:00Z",
            "status": "online",
            "blockHeight": 21_500_000
        })
    }

    /// Successful swap or transfer result
    pub fn tx_result(tx_hash: &str) -> Value {
        json!({ "success": true, "txHash": tx_hash })
    }

    /// A node as returned inside `/api/network`'s `data` array
    pub fn network_node(id: &str) -> Value {
        json!({
            "id": id,
            "name": "Polkadot",
            "blockHeight": 21_500_000,
            "uptime": 99.9,
            "status": "online",
            "rpcEndpoint": "wss://rpc.polkadot.io"
        })
    }
}

// ============================================================================
// Edge Case Addresses
// ============================================================================

/// Edge case addresses for display formatting
pub struct EdgeCaseAddresses;

impl EdgeCaseAddresses {
    /// Polkadot SS58 address
    pub const POLKADOT: &'static str = "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5";

    /// Ethereum address
    pub const ETHEREUM: &'static str = "0x742d35Cc6634C0532925a3b844Bc9e7595f5fFb9";

    /// Exactly ten characters, the default prefix + suffix length
    pub const EXACTLY_TEN: &'static str = "0123456789";

    /// One character longer than the default prefix + suffix length
    pub const ELEVEN: &'static str = "0123456789a";

    /// Multi-byte characters
    pub const UNICODE: &'static str = "ααββγγδδεεζζηηθθ";

    /// Addresses that must come back unchanged with default lengths
    pub fn short() -> Vec<&'static str> {
        vec!["", "a", "0x", Self::EXACTLY_TEN]
    }
}

// ============================================================================
// Edge Case Amounts
// ============================================================================

/// Edge case human amounts for the amount codec
pub struct EdgeCaseAmounts;

impl EdgeCaseAmounts {
    /// Inputs that coerce to a finite number
    pub fn parseable() -> Vec<&'static str> {
        vec!["0", "1", "1.5", "0.0000000001", "  2.25 ", "1e3", "-1.5", "123456789.123456789"]
    }

    /// Inputs that do not coerce to a finite number
    pub fn unparseable() -> Vec<&'static str> {
        vec!["", "abc", "1,5", "1.2.3", "NaN", "inf", "-infinity"]
    }
}

// ============================================================================
// Property-Based Testing Strategies
// ============================================================================

/// Generates address-like strings, including multi-byte characters
pub fn address_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[1-9A-HJ-NP-Za-km-z]{0,64}",
        "0x[0-9a-fA-F]{0,40}",
        "\\PC{0,32}",
    ]
}

/// Generates prefix/suffix lengths for address display
pub fn display_lengths() -> impl Strategy<Value = (usize, usize)> {
    (0usize..=12, 0usize..=12)
}

/// Generates human amounts small enough to scale exactly at 10 decimals
pub fn human_amount() -> impl Strategy<Value = f64> {
    (0u64..=1_000_000_000u64).prop_map(|units| units as f64 / 10_000.0)
}

/// Generates decimal places used by supported chains and beyond
pub fn decimals() -> impl Strategy<Value = u32> {
    0u32..=18
}

// ============================================================================
// Tests
// ============================================================================
