//! Content types and their published snapshots.

use async_trait::async_trait;

use strata_model::{Identity, ResourceKind};

use crate::context::PersistenceContext;
use crate::entity::{EntityHandle, Resource};
use crate::error::{ClientError, ClientResult};
use crate::lifecycle::{self, Publishable};

/// A content type: the schema entries of one shape are validated against.
///
/// Publishing keeps two simultaneously live cache entries per id — the
/// working draft and the published snapshot — under distinct identities, so
/// editors can diff a draft against what delivery consumers currently see.
#[derive(Debug, Clone)]
pub struct ContentType {
    handle: EntityHandle,
    context: PersistenceContext,
}

impl Resource for ContentType {
    fn kind() -> ResourceKind {
        ResourceKind::ContentType
    }

    fn from_parts(handle: EntityHandle, context: PersistenceContext) -> Self {
        Self { handle, context }
    }

    fn handle(&self) -> &EntityHandle {
        &self.handle
    }

    fn context(&self) -> &PersistenceContext {
        &self.context
    }
}

#[async_trait]
impl Publishable for ContentType {
    /// Publishing a content type also registers its published snapshot.
    async fn publish(&self, version: Option<u64>) -> ClientResult<Self> {
        let version = version.unwrap_or_else(|| self.version());
        let response = lifecycle::transition_put(self, "published", version).await?;
        let published = self.absorb(response)?;
        published.register_published()?;
        Ok(published)
    }

    /// Unpublishing marks the registered snapshot deleted before the
    /// working copy reverts to draft.
    async fn unpublish(&self) -> ClientResult<Self> {
        let response = lifecycle::transition_delete(self, "published").await?;
        self.delete_published()?;
        self.absorb(response)
    }
}

impl ContentType {
    /// The content type's name, when present.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.document()
            .and_then(|d| d.get_str("/name").map(str::to_string))
    }

    /// Registers the current document as the published snapshot: a deep
    /// clone stamped with `sys.revision = version`, cached under the
    /// `.published` identity alongside the working copy.
    pub fn register_published(&self) -> ClientResult<ContentType> {
        let mut document = self.document().ok_or(ClientError::MissingDocument)?;
        if document.sys.id.is_none() {
            return Err(ClientError::MissingId);
        }
        document.sys.revision = document.sys.version;
        let snapshot = EntityHandle::published_snapshot(document);
        let canonical = self.context.store(snapshot);
        Ok(ContentType::from_parts(canonical, self.context.clone()))
    }

    /// Looks up the cached published snapshot, if one is registered.
    #[must_use]
    pub fn published_snapshot(&self) -> Option<ContentType> {
        let id = self.id()?;
        let map = self.context.identity_map()?;
        let handle = map.get(&Identity::published(ResourceKind::ContentType, &id))?;
        Some(ContentType::from_parts(handle, self.context.clone()))
    }

    /// Marks the published snapshot deleted without touching the working
    /// copy. A snapshot that was never registered is registered first, so
    /// the deletion is observable through the cache either way.
    pub fn delete_published(&self) -> ClientResult<ContentType> {
        let snapshot = match self.published_snapshot() {
            Some(snapshot) => snapshot,
            None => self.register_published()?,
        };
        snapshot.handle().set_deleted()?;
        Ok(snapshot)
    }
}
