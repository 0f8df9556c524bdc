//! Cached record state and the base resource contract.
//!
//! A record's mutable state lives behind an [`EntityHandle`] — a shared
//! handle the identity map hands out. Typed resources (`Space`, `Entry`,
//! ...) are cheap views over a handle plus the context the record was
//! materialized in; two views observe the same record exactly when their
//! handles pass [`EntityHandle::same_instance`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde_json::Value;

use strata_model::{Document, Identity, Lifecycle, ResourceKind};

use crate::context::PersistenceContext;
use crate::error::{ClientError, ClientResult};
use crate::request::{Request, VERSION_HEADER};
use crate::transport::Method;

/// The cached, mutable state of one record.
#[derive(Debug)]
pub struct EntityState {
    document: Option<Document>,
    deleted_at_version: Option<u64>,
    published_snapshot: bool,
}

/// Shared handle to one record's state.
///
/// Mutation happens only through `update`/`set_deleted`, both synchronous
/// and free of nested async gaps, so concurrent views never observe torn
/// state despite the absence of any higher-level locking.
#[derive(Debug, Clone)]
pub struct EntityHandle {
    state: Arc<RwLock<EntityState>>,
}

impl EntityHandle {
    /// Creates a handle over a document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self::from_state(EntityState {
            document: Some(document),
            deleted_at_version: None,
            published_snapshot: false,
        })
    }

    /// Creates a handle for the published snapshot of a content type. It
    /// caches under the `.published` identity variant, so the snapshot and
    /// the working copy coexist as independent records.
    #[must_use]
    pub fn published_snapshot(document: Document) -> Self {
        Self::from_state(EntityState {
            document: Some(document),
            deleted_at_version: None,
            published_snapshot: true,
        })
    }

    fn from_state(state: EntityState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    // A poisoned lock only means a panic happened mid-update; the state
    // itself is still structurally sound, so reads and writes continue.
    fn read(&self) -> RwLockReadGuard<'_, EntityState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EntityState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The record's persisted id, if any.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.read().document.as_ref().and_then(|d| d.sys.id.clone())
    }

    /// The record's remote type, if a document is present.
    #[must_use]
    pub fn kind(&self) -> Option<ResourceKind> {
        self.read().document.as_ref().map(|d| d.sys.kind)
    }

    /// Version used for optimistic concurrency. Frozen at the pre-delete
    /// version once deleted; `0` when no document or version is present.
    #[must_use]
    pub fn version(&self) -> u64 {
        let state = self.read();
        if let Some(deleted) = state.deleted_at_version {
            return deleted;
        }
        state
            .document
            .as_ref()
            .and_then(|d| d.sys.version)
            .unwrap_or(0)
    }

    /// Current publish/archive state; `Draft` when no document is present.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.read()
            .document
            .as_ref()
            .map(|d| d.sys.lifecycle)
            .unwrap_or_default()
    }

    /// The identity this record caches under. A record without a persisted
    /// id has no identity and is never cached.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        let state = self.read();
        let document = state.document.as_ref()?;
        let id = document.sys.id.as_deref()?;
        Some(if state.published_snapshot {
            Identity::published(document.sys.kind, id)
        } else {
            Identity::new(document.sys.kind, id)
        })
    }

    /// Whether this handle represents a published snapshot.
    #[must_use]
    pub fn is_published_snapshot(&self) -> bool {
        self.read().published_snapshot
    }

    /// Replaces the document wholesale — REST `PUT` semantics, no merging.
    pub fn update(&self, document: Document) {
        self.write().document = Some(document);
    }

    /// Clones out the current document.
    #[must_use]
    pub fn document(&self) -> Option<Document> {
        self.read().document.clone()
    }

    /// Whether the record has been deleted. Deletion is terminal.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.read().deleted_at_version.is_some()
    }

    /// The version the record had when it was deleted.
    #[must_use]
    pub fn deleted_at_version(&self) -> Option<u64> {
        self.read().deleted_at_version
    }

    /// Marks the record deleted, freezing its version. Fails if the record
    /// never had a server-assigned version.
    pub fn set_deleted(&self) -> ClientResult<()> {
        let mut state = self.write();
        let version = state
            .document
            .as_ref()
            .and_then(|d| d.sys.version)
            .ok_or(ClientError::UnknownVersion)?;
        state.deleted_at_version = Some(version);
        Ok(())
    }

    /// Whether two handles refer to the same cached instance.
    #[must_use]
    pub fn same_instance(&self, other: &EntityHandle) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

/// Base contract of all remotely-backed record types.
#[async_trait]
pub trait Resource: Clone + Send + Sync + Sized {
    /// The remote type this resource models.
    fn kind() -> ResourceKind;

    /// Wraps an existing handle in this resource type.
    fn from_parts(handle: EntityHandle, context: PersistenceContext) -> Self;

    /// The shared cached state of this record.
    fn handle(&self) -> &EntityHandle;

    /// The context this record was materialized in.
    fn context(&self) -> &PersistenceContext;

    fn id(&self) -> Option<String> {
        self.handle().id()
    }

    fn version(&self) -> u64 {
        self.handle().version()
    }

    fn is_deleted(&self) -> bool {
        self.handle().is_deleted()
    }

    fn document(&self) -> Option<Document> {
        self.handle().document()
    }

    /// Replaces the record's document wholesale.
    fn update(&self, document: Document) {
        self.handle().update(document);
    }

    /// Whether this view and `other` observe the same cached record.
    fn same_record(&self, other: &Self) -> bool {
        self.handle().same_instance(other.handle())
    }

    /// Request scoped to this record's own endpoint. An unsaved record
    /// cannot address itself or sub-resources.
    fn endpoint(&self) -> ClientResult<Request> {
        let id = self.id().ok_or(ClientError::MissingId)?;
        Ok(self.context().endpoint(&[id.as_str()]))
    }

    /// Absorbs a server response: replace the document, re-register with
    /// the context, and return the canonical view — possibly backed by a
    /// different, more current handle than this one.
    fn absorb(&self, response: Value) -> ClientResult<Self> {
        let document: Document = serde_json::from_value(response)?;
        self.handle().update(document);
        let canonical = self.context().store(self.handle().clone());
        Ok(Self::from_parts(canonical, self.context().clone()))
    }

    /// Persists the record: `POST` to the collection for a first save,
    /// `PUT` to the record's own endpoint afterwards. The version header is
    /// attached only when a version is known — a first-time normalization
    /// write skips the optimistic-lock check on purpose.
    async fn save(&self) -> ClientResult<Self> {
        self.save_with(&[]).await
    }

    /// Persists the record with extra request headers (create-time scoping
    /// headers like the organization or content-type header).
    async fn save_with(&self, headers: &[(&str, &str)]) -> ClientResult<Self> {
        if self.is_deleted() {
            return Err(ClientError::Deleted);
        }
        let document = self.document().ok_or(ClientError::MissingDocument)?;
        let payload = serde_json::to_value(&document)?;

        let response = match self.id() {
            None => {
                self.context()
                    .base_request()
                    .headers(headers.iter().copied())
                    .payload(payload)
                    .send(Method::Post)
                    .await?
            }
            Some(_) => {
                let mut request = self
                    .endpoint()?
                    .headers(headers.iter().copied())
                    .payload(payload);
                let version = self.version();
                if version > 0 {
                    request = request.put_headers([(VERSION_HEADER, version.to_string())]);
                }
                request.send(Method::Put).await?
            }
        };
        self.absorb(response)
    }

    /// Deletes the record remotely, then freezes it locally as terminal.
    async fn delete(&self) -> ClientResult<()> {
        if self.is_deleted() {
            return Err(ClientError::Deleted);
        }
        self.endpoint()?.send(Method::Delete).await?;
        self.handle().set_deleted()?;
        self.context().store(self.handle().clone());
        Ok(())
    }
}
