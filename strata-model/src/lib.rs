//! Wire data model for the Strata client.
//!
//! This crate defines the fundamental, transport-agnostic types the
//! persistence layer is built on:
//! - [`Sys`] — the server-managed metadata block carried by every record
//! - [`Lifecycle`] — publish/archive state as a tagged enum
//! - [`Document`] — a full record: `sys` plus arbitrary JSON fields
//! - [`Identity`] — the canonical cache key derived from `sys`
//!
//! Everything that talks to the network (requests, contexts, the identity
//! map) belongs in `strata-client`, not here.

mod document;
mod identity;
mod kind;
mod link;
mod sys;

pub use document::Document;
pub use identity::Identity;
pub use kind::ResourceKind;
pub use link::Link;
pub use sys::{Lifecycle, Sys};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding model types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("sys.publishedVersion and sys.archivedVersion are mutually exclusive")]
    PublishedAndArchived,

    #[error("expected a Link, got sys.type {0:?}")]
    NotALink(String),
}
