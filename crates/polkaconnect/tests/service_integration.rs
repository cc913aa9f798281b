//! Integration tests for every service call against a mock backend
//!
//! Tests cover:
//! - Request shape (method, path, query, body)
//! - Payload pass-through
//! - Error propagation without retries
//! - Governance envelope handling

use polkaconnect::prelude::*;
use polkaconnect_testing::{Fixtures, MockBackend};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const DOT_ADDRESS: &str = "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5";

// ============================================================================
// Wallet
// ============================================================================

mod wallet_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_balance_sends_chain_and_address() {
        let backend = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/api/balance"))
            .and(query_param("chain", "polkadot"))
            .and(query_param("address", DOT_ADDRESS))
            .respond_with(ResponseTemplate::new(200).set_body_json(Fixtures::balance("polkadot")))
            .expect(1)
            .mount(backend.server())
            .await;

        let balance = get_balance(&backend.client(), "polkadot", DOT_ADDRESS).await.unwrap();
        assert_eq!(balance, Fixtures::balance("polkadot"));
    }

    #[tokio::test]
    async fn test_get_balance_forwards_unknown_chain() {
        let backend = MockBackend::start().await;
        backend
            .expect_json("GET", "/api/balance", 400, json!({"error": "Unsupported chain"}), 1)
            .await;

        let err = get_balance(&backend.client(), "bitcoin", "bc1q...").await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_get_assets_encodes_reserved_characters() {
        let backend = MockBackend::start().await;
        backend
            .expect_json("GET", "/api/assets/a%20b%2Fc", 200, json!({"ok": 1}), 1)
            .await;

        let assets = get_assets(&backend.client(), "a b/c").await.unwrap();
        assert_eq!(assets, json!({"ok": 1}));

        let requests = backend.server().received_requests().await.unwrap();
        assert_eq!(requests[0].url.path(), "/api/assets/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_get_assets_plain_address() {
        let backend = MockBackend::start().await;
        let body = json!({"success": true, "data": [{"symbol": "DOT"}], "cached": true});
        backend
            .expect_json("GET", &format!("/api/assets/{}", DOT_ADDRESS), 200, body.clone(), 1)
            .await;

        let assets = get_assets(&backend.client(), DOT_ADDRESS).await.unwrap();
        assert_eq!(assets, body);
    }

    #[tokio::test]
    async fn test_connect_wallet_is_local() {
        let backend = MockBackend::start().await;

        let message = connect_wallet("polkadot").await.unwrap();
        assert!(message.contains("polkadot"));
        assert!(backend.server().received_requests().await.unwrap().is_empty());
    }
}

// ============================================================================
// Swap & Transfer
// ============================================================================

mod swap_transfer_tests {
    use super::*;

    #[tokio::test]
    async fn test_swap_tokens_posts_body() {
        let backend = MockBackend::start().await;
        Mock::given(method("POST"))
            .and(path("/api/swap"))
            .and(body_json(json!({"from": "DOT", "to": "ETH", "amount": 1.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(Fixtures::tx_result("0xswap")))
            .expect(1)
            .mount(backend.server())
            .await;

        let result = swap_tokens(&backend.client(), "DOT", "ETH", 1.5).await.unwrap();
        assert_eq!(result["txHash"], "0xswap");
    }

    #[tokio::test]
    async fn test_swap_server_error_is_not_retried() {
        let backend = MockBackend::start().await;
        backend
            .expect_json("POST", "/api/swap", 500, json!({"error": "liquidity"}), 1)
            .await;

        let client = backend.client();
        let err = swap_tokens(&client, "DOT", "ETH", 1.0).await.unwrap_err();

        match &err {
            PolkaConnectError::Http { status, body } => {
                assert_eq!(*status, 500);
                assert!(body.contains("liquidity"));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
        assert_eq!(client.request_count(), 1);
        assert_eq!(backend.calls_to("/api/swap").await, 1);
    }

    #[tokio::test]
    async fn test_transfer_tokens_posts_camel_case_body() {
        let backend = MockBackend::start().await;
        Mock::given(method("POST"))
            .and(path("/api/transfer/xcm"))
            .and(body_json(json!({
                "fromChain": "polkadot",
                "toChain": "moonbeam",
                "address": "0x742d35Cc6634C0532925a3b844Bc9e7595f5fFb9",
                "amount": 2.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(Fixtures::tx_result("0xxcm")))
            .expect(1)
            .mount(backend.server())
            .await;

        let result = transfer_tokens(
            &backend.client(),
            "polkadot",
            "moonbeam",
            "0x742d35Cc6634C0532925a3b844Bc9e7595f5fFb9",
            2.0,
        )
        .await
        .unwrap();
        assert_eq!(result["success"], true);
    }
}

// ============================================================================
// Governance
// ============================================================================

mod governance_tests {
    use super::*;

    #[tokio::test]
    async fn test_proposals_returns_data_array() {
        let backend = MockBackend::start().await;
        let envelope = Fixtures::governance(2);
        backend.expect_json("GET", "/api/governance", 200, envelope.clone(), 1).await;

        let proposals = get_governance_proposals(&backend.client()).await.unwrap();
        assert_eq!(proposals, envelope["data"].as_array().unwrap().clone());
    }

    #[tokio::test]
    async fn test_proposals_missing_data_is_empty() {
        let backend = MockBackend::start().await;
        backend.respond_json("GET", "/api/governance", 200, json!({})).await;
        assert!(get_governance_proposals(&backend.client()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_proposals_null_data_is_empty() {
        let backend = MockBackend::start().await;
        backend
            .respond_json("GET", "/api/governance", 200, json!({"data": null}))
            .await;
        assert!(get_governance_proposals(&backend.client()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_proposals_non_array_data_is_decode_error() {
        let backend = MockBackend::start().await;
        backend
            .respond_json("GET", "/api/governance", 200, json!({"data": "soon"}))
            .await;

        let err = get_governance_proposals(&backend.client()).await.unwrap_err();
        assert!(matches!(err, PolkaConnectError::Decode(_)));
    }

    #[tokio::test]
    async fn test_proposals_decode_into_typed_view() {
        use polkaconnect::types::{decode_as, Proposal, ProposalStatus};

        let backend = MockBackend::start().await;
        backend
            .respond_json("GET", "/api/governance", 200, Fixtures::governance(1))
            .await;

        let raw = get_governance_proposals(&backend.client()).await.unwrap();
        let proposal: Proposal = decode_as(raw[0].clone()).unwrap();
        assert_eq!(proposal.id, 1);
        assert_eq!(proposal.status, ProposalStatus::Active);
    }

    #[tokio::test]
    async fn test_summary_with_address() {
        let backend = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/api/governance/summary"))
            .and(query_param("address", DOT_ADDRESS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"votesCast": 3})))
            .expect(1)
            .mount(backend.server())
            .await;

        let summary = get_governance_summary(&backend.client(), Some(DOT_ADDRESS))
            .await
            .unwrap();
        assert_eq!(summary["votesCast"], 3);
    }

    #[tokio::test]
    async fn test_summary_without_address_sends_no_query() {
        let backend = MockBackend::start().await;
        backend
            .expect_json("GET", "/api/governance/summary", 200, json!({"active": 12}), 2)
            .await;

        let client = backend.client();
        get_governance_summary(&client, None).await.unwrap();
        get_governance_summary(&client, Some("")).await.unwrap();

        let requests = backend.server().received_requests().await.unwrap();
        assert!(requests.iter().all(|r| r.url.query().is_none()));
    }

    #[tokio::test]
    async fn test_submit_vote() {
        let backend = MockBackend::start().await;
        Mock::given(method("POST"))
            .and(path("/api/governance/vote"))
            .and(body_json(json!({
                "referendumId": 1,
                "walletAddress": DOT_ADDRESS,
                "vote": "nay",
                "conviction": 6,
                "balance": "25"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(backend.server())
            .await;

        let vote = VoteRequest::new(1, DOT_ADDRESS, VoteDirection::Nay, "25")
            .with_conviction(Conviction::Locked6x);
        let result = submit_vote(&backend.client(), &vote).await.unwrap();
        assert_eq!(result["success"], true);
    }
}

// ============================================================================
// Network & Staking
// ============================================================================

mod network_staking_tests {
    use super::*;

    #[tokio::test]
    async fn test_network_status() {
        let backend = MockBackend::start().await;
        let body = json!({"success": true, "data": [Fixtures::network_node("polkadot")]});
        backend.expect_json("GET", "/api/network", 200, body.clone(), 1).await;

        let status = get_network_status(&backend.client()).await.unwrap();
        assert_eq!(status, body);

        let nodes = polkaconnect::utils::data_field(&status).unwrap();
        let node: polkaconnect::types::NetworkNode =
            polkaconnect::types::decode_as(nodes[0].clone()).unwrap();
        assert_eq!(node.id, "polkadot");
    }

    #[tokio::test]
    async fn test_xcm_activity() {
        let backend = MockBackend::start().await;
        backend
            .expect_json("GET", "/api/network/xcm", 200, json!({"data": {"channels": 42}}), 1)
            .await;

        let activity = get_xcm_activity(&backend.client()).await.unwrap();
        assert_eq!(activity["data"]["channels"], 42);
    }

    #[tokio::test]
    async fn test_staking_analytics_with_bonded_amount() {
        let backend = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path("/api/staking/analytics"))
            .and(query_param("bondedAmount", "100.5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apy": 14.2})))
            .expect(1)
            .mount(backend.server())
            .await;

        let analytics = get_staking_analytics(&backend.client(), Some(100.5)).await.unwrap();
        assert_eq!(analytics["apy"], 14.2);
    }

    #[tokio::test]
    async fn test_staking_analytics_rejects_nan() {
        let backend = MockBackend::start().await;
        let err = get_staking_analytics(&backend.client(), Some(f64::NAN))
            .await
            .unwrap_err();
        assert!(matches!(err, PolkaConnectError::InvalidAmount(_)));
        assert_eq!(backend.calls_to("/api/staking/analytics").await, 0);
    }
}

// ============================================================================
// Client behaviour through feature calls
// ============================================================================

mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_api_key_sent_on_every_call() {
        let backend = MockBackend::start().await;
        Mock::given(header("X-API-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(3)
            .mount(backend.server())
            .await;

        let client = backend.client_with_api_key("test-key");
        get_balance(&client, "polkadot", DOT_ADDRESS).await.unwrap();
        swap_tokens(&client, "DOT", "ETH", 1.0).await.unwrap();
        get_governance_proposals(&client).await.unwrap();
    }

    #[tokio::test]
    async fn test_shared_client_across_tasks() {
        let backend = MockBackend::start().await;
        backend.expect_json("GET", "/api/network", 200, json!({}), 8).await;

        let client = backend.client();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { get_network_status(&client).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(client.request_count(), 8);
    }

    #[tokio::test]
    async fn test_trailing_slash_base_url() {
        let backend = MockBackend::start().await;
        backend.expect_json("GET", "/api/network/xcm", 200, json!([]), 1).await;

        let client = ApiClient::new(ClientConfig::new(format!("{}/", backend.uri()))).unwrap();
        assert_eq!(get_xcm_activity(&client).await.unwrap(), json!([]));
    }
}
