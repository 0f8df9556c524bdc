//! Error types for the persistence client.

use std::sync::Arc;

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in persistence operations.
///
/// Precondition errors (`MissingId`, `UnknownVersion`, `Deleted`) indicate
/// caller misuse and surface before any request is issued. Transport errors
/// (`Api`, `Http`) carry whatever the adapter produced, unmodified — this
/// layer performs no retries and no status-code interpretation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("record has no id")]
    MissingId,

    #[error("record has no document")]
    MissingDocument,

    #[error("record version is unknown")]
    UnknownVersion,

    #[error("record is deleted")]
    Deleted,

    #[error("empty response body")]
    EmptyResponse,

    #[error("expected a collection envelope, got sys.type {0:?}")]
    NotACollection(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An error injected into a request builder; the request never reaches
    /// the transport.
    #[error("request aborted: {0}")]
    Aborted(Arc<ClientError>),
}
