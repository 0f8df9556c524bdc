//! Entity persistence client for a Contentful-style management API.
//!
//! Models remote CMS records (spaces, content types, entries, assets) as
//! locally cached, version-tracked records, mediating all reads and writes
//! through a uniform request-building pipeline.
//!
//! # Architecture
//!
//! - **Request**: immutable builder for one HTTP call, executed through an
//!   injected [`Transport`] adapter
//! - **IdentityMap**: one canonical in-memory record per remote identity,
//!   updated last-writer-wins by version number
//! - **PersistenceContext**: binds a request base path to a shared identity
//!   map; derived contexts share the map, which is how a space's child
//!   collections observe one cache
//! - **Resources**: typed views (`Space`, `ContentType`, `Entry`, `Asset`)
//!   over shared record handles, with [`Publishable`]/[`Archivable`]
//!   capabilities composed per type
//!
//! Optimistic concurrency uses the `X-Contentful-Version` header: attached
//! to every PUT whenever the local version is known, omitted on create.
//! This layer performs no retries and no status-code interpretation —
//! transport errors propagate to the caller as the adapter produced them.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use strata_client::{Client, HttpConfig, HttpTransport, Publishable};
//!
//! # async fn run() -> strata_client::ClientResult<()> {
//! let transport = HttpTransport::new(HttpConfig {
//!     access_token: "token".to_string(),
//!     ..HttpConfig::default()
//! })?;
//! let client = Client::new(Arc::new(transport));
//!
//! let space = client.space("my-space").await?;
//! let entries = space.entries()?;
//! let entry = entries.get_by_id("my-entry").await?;
//! if entry.can_publish() {
//!     entry.publish(None).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod asset;
mod client;
mod collection;
mod content_type;
mod context;
mod entity;
mod entry;
mod error;
mod factory;
mod http;
mod identity_map;
mod lifecycle;
mod query;
mod request;
mod space;
mod transport;

pub use asset::Asset;
pub use client::{Client, CONTENT_TYPE_HEADER, ORGANIZATION_HEADER};
pub use collection::Collection;
pub use content_type::ContentType;
pub use context::PersistenceContext;
pub use entity::{EntityHandle, EntityState, Resource};
pub use entry::Entry;
pub use error::{ClientError, ClientResult};
pub use factory::ResourceEndpoint;
pub use http::{HttpConfig, HttpTransport};
pub use identity_map::{IdentityMap, SharedIdentityMap};
pub use lifecycle::{Archivable, Publishable};
pub use query::Query;
pub use request::{Request, VERSION_HEADER};
pub use space::Space;
pub use transport::{Method, Transport, TransportRequest};
