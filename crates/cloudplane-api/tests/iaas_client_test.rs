// Integration tests for `IaasClient` and `IaasAlphaClient` using wiremock.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cloudplane_api::iaas::types::{
    CreateNetworkAddressFamily, CreateNetworkAreaRoutePayload, CreateNetworkIpv4,
    CreateNetworkIpv6, CreateNetworkPayload, RoutePayload, UpdatePublicIpPayload,
};
use cloudplane_api::iaas::wait::{delete_network_wait_handler, network_ready_wait_handler};
use cloudplane_api::iaas_alpha;
use cloudplane_api::{Error, IaasAlphaClient, IaasClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, IaasClient) {
    let server = MockServer::start().await;
    let client = IaasClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Networks ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_network_ipv6_nameservers_three_state() {
    let (server, client) = setup().await;

    // ipv6 present with an explicit empty list; ipv4 list always sent.
    Mock::given(method("POST"))
        .and(path("/v1/projects/p1/networks"))
        .and(body_json(json!({
            "name": "net",
            "addressFamily": {
                "ipv4": { "nameservers": [] },
                "ipv6": { "nameservers": [], "prefixLength": 56 }
            }
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "networkId": "n1",
            "state": "CREATING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = CreateNetworkPayload {
        name: "net".into(),
        address_family: CreateNetworkAddressFamily {
            ipv4: CreateNetworkIpv4::default(),
            ipv6: Some(CreateNetworkIpv6 {
                nameservers: Some(vec![]),
                prefix_length: Some(56),
            }),
        },
        labels: None,
        routed: None,
    };
    let network = client.create_network("p1", &body).await.unwrap();
    assert_eq!(network.network_id.as_deref(), Some("n1"));
}

#[tokio::test]
async fn test_network_ready_wait() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/networks/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "networkId": "n1", "state": "CREATING"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/networks/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "networkId": "n1",
            "state": "CREATED",
            "nameservers": ["10.0.0.53"],
            "prefixes": ["10.0.0.0/24"]
        })))
        .mount(&server)
        .await;

    let network = network_ready_wait_handler(&client, "p1", "n1")
        .with_throttle(Duration::from_millis(5))
        .wait(&CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(network.prefixes, Some(vec!["10.0.0.0/24".to_owned()]));
    assert_eq!(network.nameservers_v6, None);
}

#[tokio::test]
async fn test_delete_network_wait_until_404() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/networks/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "networkId": "n1", "state": "DELETING"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/networks/n1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    delete_network_wait_handler(&client, "p1", "n1")
        .with_throttle(Duration::from_millis(5))
        .wait(&CancellationToken::new())
        .await
        .unwrap();
}

// ── Network area routes ─────────────────────────────────────────────

#[tokio::test]
async fn test_create_route_returns_items_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/organizations/o1/network-areas/a1/routes"))
        .and(body_json(json!({
            "ipv4": [{ "prefix": "192.168.0.0/24", "nexthop": "10.1.1.1" }]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "items": [{ "routeId": "rt1", "prefix": "192.168.0.0/24", "nexthop": "10.1.1.1" }]
        })))
        .mount(&server)
        .await;

    let body = CreateNetworkAreaRoutePayload {
        ipv4: vec![RoutePayload {
            prefix: "192.168.0.0/24".into(),
            nexthop: "10.1.1.1".into(),
            labels: None,
        }],
    };
    let routes = client
        .create_network_area_routes("o1", "a1", &body)
        .await
        .unwrap();
    assert_eq!(routes.items.len(), 1);
    assert_eq!(routes.items[0].route_id.as_deref(), Some("rt1"));
}

// ── Public IPs ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_public_ip_sends_null_interface() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/projects/p1/public-ips/ip1"))
        .and(body_json(json!({ "networkInterface": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ip1", "ip": "203.0.113.7"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ip = client
        .update_public_ip("p1", "ip1", &UpdatePublicIpPayload::default())
        .await
        .unwrap();
    assert_eq!(ip.network_interface, None);
}

// ── Server service accounts ─────────────────────────────────────────

#[tokio::test]
async fn test_service_account_attach_and_list() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/v1/projects/p1/servers/s1/service-accounts/sa@example.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/servers/s1/service-accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": ["sa@example.com"]
        })))
        .mount(&server)
        .await;

    client
        .add_service_account_to_server("p1", "s1", "sa@example.com")
        .await
        .unwrap();
    let accounts = client
        .list_server_service_accounts("p1", "s1")
        .await
        .unwrap();
    assert_eq!(accounts.items, vec!["sa@example.com".to_owned()]);
}

#[tokio::test]
async fn test_error_body_with_string_code() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/organizations/o1/network-areas/a1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "forbidden", "code": "ACCESS_DENIED"
        })))
        .mount(&server)
        .await;

    let result = client.get_network_area("o1", "a1").await;
    match result {
        Err(Error::Api {
            status,
            message,
            code,
        }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "forbidden");
            assert_eq!(code.as_deref(), Some("ACCESS_DENIED"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ── IaaS v2alpha ────────────────────────────────────────────────────

#[tokio::test]
async fn test_alpha_network_is_region_scoped() {
    let server = MockServer::start().await;
    let client = IaasAlphaClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();

    Mock::given(method("GET"))
        .and(path("/v2alpha/projects/p1/regions/eu01/networks/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "n1",
            "name": "net",
            "ipv4": { "nameservers": ["1.1.1.1"], "prefixes": ["10.0.0.0/24"] },
            "routingTableId": "rt-1",
            "status": "CREATED"
        })))
        .mount(&server)
        .await;

    let network = iaas_alpha::wait::network_ready_wait_handler(&client, "p1", "eu01", "n1")
        .with_throttle(Duration::from_millis(5))
        .wait(&CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(network.routing_table_id.as_deref(), Some("rt-1"));
    assert_eq!(
        network.ipv4.unwrap().nameservers,
        Some(vec!["1.1.1.1".to_owned()])
    );
    assert!(network.ipv6.is_none());
}
