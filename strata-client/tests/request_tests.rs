mod common;

use common::MockTransport;
use serde_json::json;
use strata_client::{ClientError, Method, Request, VERSION_HEADER};

// ── Path building ────────────────────────────────────────────────

#[test]
fn paths_joins_segments_with_leading_slash() {
    let request = Request::new(MockTransport::new());
    assert_eq!(request.paths(["spaces", "s1"]).path(), "/spaces/s1");
}

#[test]
fn paths_drops_empty_segments() {
    let request = Request::new(MockTransport::new());
    assert_eq!(request.paths(["a", "", "b"]).path(), "/a/b");
}

#[test]
fn paths_collapses_duplicate_slashes() {
    // The segments themselves may carry slashes; every run collapses.
    let request = Request::new(MockTransport::new());
    assert_eq!(request.paths(["a//b", "/c/"]).path(), "/a/b/c");
}

#[test]
fn paths_composes_across_calls() {
    let request = Request::new(MockTransport::new());
    let scoped = request.paths(["spaces", "s1"]).paths(["entries", "e1"]);
    assert_eq!(scoped.path(), "/spaces/s1/entries/e1");
}

// ── Builder immutability ─────────────────────────────────────────

#[test]
fn builder_calls_leave_the_original_untouched() {
    let base = Request::new(MockTransport::new()).paths(["a"]);
    let _scoped = base.paths(["b"]);
    let _with_payload = base.payload(json!({"x": 1}));
    let _with_headers = base.headers([("H", "1")]);
    assert_eq!(base.path(), "/a");
}

// ── Header handling ──────────────────────────────────────────────

#[tokio::test]
async fn put_headers_are_merged_only_for_put() {
    let mock = MockTransport::new();
    let request = Request::new(mock.clone())
        .paths(["x"])
        .headers([("X-Common", "yes")])
        .put_headers([(VERSION_HEADER, "3")]);

    request.send(Method::Get).await.unwrap();
    let get = mock.last_request();
    assert_eq!(get.headers.get("X-Common").map(String::as_str), Some("yes"));
    assert!(!get.headers.contains_key(VERSION_HEADER));

    request.send(Method::Put).await.unwrap();
    let put = mock.last_request();
    assert_eq!(put.headers.get(VERSION_HEADER).map(String::as_str), Some("3"));
    assert_eq!(put.headers.get("X-Common").map(String::as_str), Some("yes"));
}

#[tokio::test]
async fn delete_header_removes_a_header() {
    let mock = MockTransport::new();
    Request::new(mock.clone())
        .headers([("A", "1"), ("B", "2")])
        .delete_header("A")
        .send(Method::Get)
        .await
        .unwrap();

    let seen = mock.last_request();
    assert!(!seen.headers.contains_key("A"));
    assert_eq!(seen.headers.get("B").map(String::as_str), Some("2"));
}

// ── Payload ──────────────────────────────────────────────────────

#[tokio::test]
async fn payload_is_passed_through() {
    let mock = MockTransport::new();
    Request::new(mock.clone())
        .paths(["x"])
        .payload(json!({"name": "n"}))
        .send(Method::Post)
        .await
        .unwrap();

    assert_eq!(mock.last_request().payload, Some(json!({"name": "n"})));
}

// ── Injected errors ──────────────────────────────────────────────

#[tokio::test]
async fn throw_short_circuits_without_calling_the_transport() {
    let mock = MockTransport::new();
    let result = Request::new(mock.clone())
        .throw(ClientError::MissingId)
        .send(Method::Get)
        .await;

    assert!(matches!(result, Err(ClientError::Aborted(_))));
    assert_eq!(mock.request_count(), 0);
}

// ── Empty responses ──────────────────────────────────────────────

#[tokio::test]
async fn reject_empty_rejects_a_null_body() {
    let mock = MockTransport::new();
    mock.push_ok(serde_json::Value::Null);
    let result = Request::new(mock.clone())
        .paths(["x"])
        .reject_empty()
        .send(Method::Get)
        .await;
    assert!(matches!(result, Err(ClientError::EmptyResponse)));
}

#[tokio::test]
async fn reject_empty_passes_a_real_body() {
    let mock = MockTransport::new();
    mock.push_ok(json!({"ok": true}));
    let value = Request::new(mock.clone())
        .paths(["x"])
        .reject_empty()
        .send(Method::Get)
        .await
        .unwrap();
    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn without_reject_empty_a_null_body_is_fine() {
    let mock = MockTransport::new();
    let value = Request::new(mock.clone())
        .paths(["x"])
        .send(Method::Delete)
        .await
        .unwrap();
    assert!(value.is_null());
}

// ── Method sugar ─────────────────────────────────────────────────

#[tokio::test]
async fn method_shorthands_use_the_right_verbs() {
    let mock = MockTransport::new();
    let request = Request::new(mock.clone()).paths(["x"]);

    request.get().await.unwrap();
    assert_eq!(mock.last_request().method, Method::Get);
    request.post().await.unwrap();
    assert_eq!(mock.last_request().method, Method::Post);
    request.put().await.unwrap();
    assert_eq!(mock.last_request().method, Method::Put);
    request.delete().await.unwrap();
    assert_eq!(mock.last_request().method, Method::Delete);
}
