//! Shared test helpers: a scripted in-memory transport and canned responses.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use strata_client::{ClientError, ClientResult, Transport, TransportRequest};

/// Transport that replays scripted responses and records every request.
///
/// When the script runs dry it answers JSON null, which matches what a
/// bodyless 2xx looks like through the real transport.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<ClientResult<Value>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues the next successful response.
    pub fn push_ok(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    /// Queues the next failure.
    pub fn push_err(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests().last().cloned().expect("no request recorded")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, params: TransportRequest) -> ClientResult<Value> {
        self.requests.lock().unwrap().push(params);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

// ── Canned responses ─────────────────────────────────────────────

pub fn space_response(id: &str, version: u64) -> Value {
    json!({
        "sys": {"id": id, "type": "Space", "version": version},
        "name": "Test Space"
    })
}

pub fn entry_response(id: &str, version: u64) -> Value {
    json!({
        "sys": {"id": id, "type": "Entry", "version": version},
        "fields": {}
    })
}

pub fn published_entry_response(id: &str, version: u64, published_version: u64) -> Value {
    json!({
        "sys": {
            "id": id,
            "type": "Entry",
            "version": version,
            "publishedVersion": published_version
        },
        "fields": {}
    })
}

pub fn archived_entry_response(id: &str, version: u64, archived_version: u64) -> Value {
    json!({
        "sys": {
            "id": id,
            "type": "Entry",
            "version": version,
            "archivedVersion": archived_version
        },
        "fields": {}
    })
}

pub fn asset_response(id: &str, version: u64) -> Value {
    json!({
        "sys": {"id": id, "type": "Asset", "version": version},
        "fields": {"file": {}}
    })
}

pub fn content_type_response(id: &str, version: u64) -> Value {
    json!({
        "sys": {"id": id, "type": "ContentType", "version": version},
        "name": "Blog Post",
        "fields": []
    })
}

pub fn published_content_type_response(id: &str, version: u64, published_version: u64) -> Value {
    json!({
        "sys": {
            "id": id,
            "type": "ContentType",
            "version": version,
            "publishedVersion": published_version
        },
        "name": "Blog Post",
        "fields": []
    })
}

pub fn collection_response(items: Vec<Value>, total: u64) -> Value {
    json!({"sys": {"type": "Array"}, "items": items, "total": total})
}
