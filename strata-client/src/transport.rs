//! Transport adapter abstraction.
//!
//! The persistence layer never talks HTTP directly; it assembles
//! [`TransportRequest`]s and hands them to whatever [`Transport`] it was
//! constructed with. Error shape is owned by the adapter and propagated
//! opaquely — the core never inspects status codes.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientResult;

/// HTTP method of a wire call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the method's wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully assembled wire call.
///
/// For GET requests the payload is conventionally rendered as query
/// parameters by the adapter; for PUT/POST it becomes the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub payload: Option<Value>,
}

/// Abstract transport adapter interface.
///
/// Implementations resolve to the raw JSON response body (JSON null for an
/// empty body) or reject with their own error shape.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes one wire call.
    async fn request(&self, params: TransportRequest) -> ClientResult<Value>;
}
