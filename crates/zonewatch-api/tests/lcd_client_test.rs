#![allow(clippy::unwrap_used)]
// Integration tests for `LcdClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zonewatch_api::{Error, LcdClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, LcdClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = LcdClient::with_client(reqwest::Client::new(), base_url).with_page_limit(2);
    (server, client)
}

// ── Client state tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_list_client_states() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ibc/core/client/v1/client_states"))
        .and(query_param("pagination.limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "client_states": [
                {
                    "client_id": "07-tendermint-0",
                    "client_state": {
                        "@type": "/ibc.lightclients.tendermint.v1.ClientState",
                        "chain_id": "osmosis-1"
                    }
                },
                {
                    "client_id": "09-localhost",
                    "client_state": { "@type": "/ibc.lightclients.localhost.v2.ClientState" }
                }
            ],
            "pagination": { "next_key": null, "total": "2" }
        })))
        .mount(&server)
        .await;

    let states = client.list_client_states().await.unwrap();

    assert_eq!(states.len(), 2);
    assert_eq!(states[0].client_id, "07-tendermint-0");
    assert_eq!(states[0].chain_id(), Some("osmosis-1"));
    assert_eq!(states[1].chain_id(), None);
}

// ── Pagination tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_connections_follows_next_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ibc/core/connection/v1/connections"))
        .and(query_param_is_missing("pagination.key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "connections": [
                { "id": "connection-0", "client_id": "07-tendermint-0", "state": "STATE_OPEN" },
                { "id": "connection-1", "client_id": "07-tendermint-1", "state": "STATE_OPEN" }
            ],
            "pagination": { "next_key": "Y29ubmVjdGlvbi0y" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ibc/core/connection/v1/connections"))
        .and(query_param("pagination.key", "Y29ubmVjdGlvbi0y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "connections": [
                { "id": "connection-2", "client_id": "07-tendermint-5" }
            ],
            "pagination": { "next_key": null }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connections = client.list_connections().await.unwrap();

    let ids: Vec<&str> = connections.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["connection-0", "connection-1", "connection-2"]);
    assert_eq!(connections[2].client_id, "07-tendermint-5");
}

#[tokio::test]
async fn test_repeated_next_key_is_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ibc/core/channel/v1/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channels": [],
            "pagination": { "next_key": "c3R1Y2s=" }
        })))
        .mount(&server)
        .await;

    let result = client.list_channels().await;

    assert!(
        matches!(result, Err(Error::PaginationLoop { ref key }) if key == "c3R1Y2s="),
        "expected PaginationLoop error, got: {result:?}"
    );
}

// ── Channel tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_channels() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ibc/core/channel/v1/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channels": [{
                "state": "STATE_OPEN",
                "ordering": "ORDER_UNORDERED",
                "counterparty": { "port_id": "transfer", "channel_id": "channel-141" },
                "connection_hops": ["connection-257"],
                "version": "ics20-1",
                "port_id": "transfer",
                "channel_id": "channel-0"
            }],
            "pagination": { "next_key": null, "total": "1" }
        })))
        .mount(&server)
        .await;

    let channels = client.list_channels().await.unwrap();

    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].channel_id, "channel-0");
    assert_eq!(channels[0].connection_id(), Some("connection-257"));
    assert_eq!(channels[0].counterparty_channel_id(), Some("channel-141"));
    assert!(channels[0].is_open());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_cosmos_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(501).set_body_json(json!({
            "code": 12,
            "message": "Not Implemented",
            "details": []
        })))
        .mount(&server)
        .await;

    let result = client.list_client_states().await;

    match result {
        Err(Error::Lcd { code, ref message }) => {
            assert_eq!(code, 12);
            assert_eq!(message, "Not Implemented");
        }
        other => panic!("expected Lcd error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let result = client.list_connections().await;

    match result {
        Err(ref err @ Error::Http { status, ref message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
            assert!(err.is_transient());
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.list_channels().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("maintenance"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
