//! Immutable request builder.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::transport::{Method, Transport, TransportRequest};

/// Name of the optimistic-concurrency header attached to PUT requests.
pub const VERSION_HEADER: &str = "X-Contentful-Version";

/// An immutable builder representing one HTTP call.
///
/// Every builder method returns a new `Request`; the original is untouched.
/// `put_headers` are merged into the headers only when the request is sent
/// with PUT — this is how version headers stay off GET/DELETE calls built
/// from the same base.
#[derive(Clone)]
pub struct Request {
    transport: Arc<dyn Transport>,
    path: String,
    headers: BTreeMap<String, String>,
    put_headers: BTreeMap<String, String>,
    payload: Option<Value>,
    injected_error: Option<Arc<ClientError>>,
    reject_empty: bool,
}

impl Request {
    /// Creates a root request bound to a transport adapter.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            path: String::new(),
            headers: BTreeMap::new(),
            put_headers: BTreeMap::new(),
            payload: None,
            injected_error: None,
            reject_empty: false,
        }
    }

    /// The request path built so far.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Appends path segments. Empty segments are dropped and duplicate
    /// slashes collapse to one; the result carries a single leading slash.
    #[must_use]
    pub fn paths<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        next.path = join_path(&self.path, segments);
        next
    }

    /// Merges headers into the request.
    #[must_use]
    pub fn headers<I, K, V>(&self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut next = self.clone();
        next.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        next
    }

    /// Merges headers that apply only when the request is sent with PUT.
    #[must_use]
    pub fn put_headers<I, K, V>(&self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut next = self.clone();
        next.put_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        next
    }

    /// Removes a header set earlier.
    #[must_use]
    pub fn delete_header(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.headers.remove(name);
        next
    }

    /// Sets the payload: JSON body for PUT/POST, query parameters for GET.
    #[must_use]
    pub fn payload(&self, payload: Value) -> Self {
        let mut next = self.clone();
        next.payload = Some(payload);
        next
    }

    /// Injects an error: `send` short-circuits to it without ever calling
    /// the transport. Used to build known-invalid request placeholders.
    #[must_use]
    pub fn throw(&self, error: ClientError) -> Self {
        let mut next = self.clone();
        next.injected_error = Some(Arc::new(error));
        next
    }

    /// Makes `send` reject when the server returns an empty body.
    #[must_use]
    pub fn reject_empty(&self) -> Self {
        let mut next = self.clone();
        next.reject_empty = true;
        next
    }

    /// Executes the request with the given method.
    pub async fn send(&self, method: Method) -> ClientResult<Value> {
        if let Some(error) = &self.injected_error {
            return Err(ClientError::Aborted(Arc::clone(error)));
        }

        let mut headers = self.headers.clone();
        if method == Method::Put {
            headers.extend(
                self.put_headers
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
        }

        debug!(method = %method, path = %self.path, "dispatching request");
        let response = self
            .transport
            .request(TransportRequest {
                method,
                path: self.path.clone(),
                headers,
                payload: self.payload.clone(),
            })
            .await?;

        if self.reject_empty && response.is_null() {
            return Err(ClientError::EmptyResponse);
        }
        Ok(response)
    }

    pub async fn get(&self) -> ClientResult<Value> {
        self.send(Method::Get).await
    }

    pub async fn post(&self) -> ClientResult<Value> {
        self.send(Method::Post).await
    }

    pub async fn put(&self) -> ClientResult<Value> {
        self.send(Method::Put).await
    }

    pub async fn delete(&self) -> ClientResult<Value> {
        self.send(Method::Delete).await
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("path", &self.path)
            .field("headers", &self.headers)
            .field("put_headers", &self.put_headers)
            .field("payload", &self.payload)
            .field("reject_empty", &self.reject_empty)
            .finish_non_exhaustive()
    }
}

/// Joins `base` and `segments` with `/`, dropping empty segments. All runs
/// of consecutive slashes collapse, so `"a//b"` normalizes to `a/b`.
fn join_path<I, S>(base: &str, segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts: Vec<&str> = Vec::new();
    let segments: Vec<String> = segments
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    for piece in std::iter::once(base).chain(segments.iter().map(String::as_str)) {
        parts.extend(piece.split('/').filter(|part| !part.is_empty()));
    }
    format!("/{}", parts.join("/"))
}
