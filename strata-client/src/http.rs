//! Default HTTP transport over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::transport::{Method, Transport, TransportRequest};

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL request paths are appended to.
    pub base_url: String,
    /// Bearer token attached to every request.
    pub access_token: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.contentful.com".to_string(),
            access_token: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Transport adapter over a reqwest client.
///
/// PUT/POST payloads become JSON bodies; GET/DELETE payloads become query
/// parameters. Non-2xx responses map to [`ClientError::Api`] with the raw
/// body as the message; empty success bodies surface as JSON null.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: HttpConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport from configuration.
    pub fn new(config: HttpConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// The configuration this transport was built from.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, params: TransportRequest) -> ClientResult<Value> {
        let url = self.url(&params.path);
        let mut builder = match params.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        builder = builder.bearer_auth(&self.config.access_token);
        for (name, value) in &params.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(payload) = &params.payload {
            builder = match params.method {
                Method::Get | Method::Delete => builder.query(&query_pairs(payload)),
                Method::Post | Method::Put => builder.json(payload),
            };
        }

        debug!(method = %params.method, %url, "http request");
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(method = %params.method, %url, status = status.as_u16(), "http request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Renders a JSON object payload as flat query pairs.
fn query_pairs(payload: &Value) -> Vec<(String, String)> {
    match payload {
        Value::Object(map) => map
            .iter()
            .map(|(name, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), rendered)
            })
            .collect(),
        _ => Vec::new(),
    }
}
