use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::json;
use strata_client::{
    Client, ClientError, HttpConfig, HttpTransport, Method, Publishable, Resource, Transport,
    TransportRequest, VERSION_HEADER,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(server: &MockServer) -> HttpTransport {
    HttpTransport::new(HttpConfig {
        base_url: server.uri(),
        access_token: "tok".to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn bare(method: Method, path: &str) -> TransportRequest {
    TransportRequest {
        method,
        path: path.to_string(),
        headers: BTreeMap::new(),
        payload: None,
    }
}

// ── Config defaults ─────────────────────────────────────────────

#[test]
fn http_config_default() {
    let config = HttpConfig::default();
    assert_eq!(config.base_url, "https://api.contentful.com");
    assert!(config.access_token.is_empty());
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn http_config_serde_roundtrip() {
    let config = HttpConfig {
        base_url: "https://api.example.test".to_string(),
        access_token: "secret".to_string(),
        timeout_secs: 10,
    };
    let encoded = serde_json::to_string(&config).unwrap();
    let decoded: HttpConfig = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.base_url, "https://api.example.test");
    assert_eq!(decoded.access_token, "secret");
    assert_eq!(decoded.timeout_secs, 10);
}

// ── Request execution ───────────────────────────────────────────

#[tokio::test]
async fn get_sends_bearer_auth_and_parses_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spaces/s1"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": {"id": "s1", "type": "Space", "version": 1}
        })))
        .mount(&server)
        .await;

    let value = transport(&server)
        .request(bare(Method::Get, "/spaces/s1"))
        .await
        .unwrap();
    assert_eq!(value["sys"]["id"], "s1");
}

#[tokio::test]
async fn put_sends_json_body_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/spaces/s1/entries/e1"))
        .and(header(VERSION_HEADER, "2"))
        .and(body_json(json!({"fields": {}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": {"id": "e1", "type": "Entry", "version": 3}
        })))
        .mount(&server)
        .await;

    let mut params = bare(Method::Put, "/spaces/s1/entries/e1");
    params
        .headers
        .insert(VERSION_HEADER.to_string(), "2".to_string());
    params.payload = Some(json!({"fields": {}}));

    let value = transport(&server).request(params).await.unwrap();
    assert_eq!(value["sys"]["version"], 3);
}

#[tokio::test]
async fn get_payload_becomes_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spaces/s1/entries"))
        .and(query_param("content_type", "ct1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": {"type": "Array"}, "items": [], "total": 0
        })))
        .mount(&server)
        .await;

    let mut params = bare(Method::Get, "/spaces/s1/entries");
    params.payload = Some(json!({"content_type": "ct1", "limit": "10"}));

    let value = transport(&server).request(params).await.unwrap();
    assert_eq!(value["total"], 0);
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spaces/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let result = transport(&server)
        .request(bare(Method::Get, "/spaces/missing"))
        .await;
    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_body_resolves_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/spaces/s1/entries/e1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = transport(&server)
        .request(bare(Method::Delete, "/spaces/s1/entries/e1"))
        .await
        .unwrap();
    assert!(value.is_null());
}

// ── End to end through the client ───────────────────────────────

#[tokio::test]
async fn fetch_and_publish_through_the_real_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spaces/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": {"id": "s1", "type": "Space", "version": 1},
            "name": "Demo"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/spaces/s1/entries/e1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": {"id": "e1", "type": "Entry", "version": 1},
            "fields": {}
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/spaces/s1/entries/e1/published"))
        .and(header(VERSION_HEADER, "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": {"id": "e1", "type": "Entry", "version": 2, "publishedVersion": 1},
            "fields": {}
        })))
        .mount(&server)
        .await;

    let client = Client::new(Arc::new(transport(&server)));
    let space = client.space("s1").await.unwrap();
    let entry = space.entries().unwrap().get_by_id("e1").await.unwrap();
    let published = entry.publish(None).await.unwrap();

    assert!(published.is_published());
    assert_eq!(published.version(), 2);
    assert!(published.same_record(&entry));
}
