//! Publish and archive capabilities.
//!
//! Composable traits over the base [`Resource`] contract. The
//! cross-capability guards — publishing is blocked while archived,
//! archiving while published — read the shared lifecycle state directly
//! rather than relying on any particular trait combination being present.

use async_trait::async_trait;
use serde_json::Value;

use crate::entity::Resource;
use crate::error::{ClientError, ClientResult};
use crate::request::VERSION_HEADER;
use crate::transport::Method;

/// PUT to a lifecycle sub-resource, with the version header attached when a
/// version is known.
pub(crate) async fn transition_put<R: Resource>(
    resource: &R,
    segment: &str,
    version: u64,
) -> ClientResult<Value> {
    if resource.is_deleted() {
        return Err(ClientError::Deleted);
    }
    let mut request = resource.endpoint()?.paths([segment]);
    if version > 0 {
        request = request.put_headers([(VERSION_HEADER, version.to_string())]);
    }
    request.send(Method::Put).await
}

/// DELETE a lifecycle sub-resource.
pub(crate) async fn transition_delete<R: Resource>(
    resource: &R,
    segment: &str,
) -> ClientResult<Value> {
    if resource.is_deleted() {
        return Err(ClientError::Deleted);
    }
    resource.endpoint()?.paths([segment]).send(Method::Delete).await
}

/// Publish capability: the record moves between draft and published through
/// its `.../published` sub-resource.
#[async_trait]
pub trait Publishable: Resource {
    fn published_version(&self) -> Option<u64> {
        self.handle().lifecycle().published_version()
    }

    fn is_published(&self) -> bool {
        self.published_version().is_some()
    }

    /// Whether the working copy has diverged from the published revision.
    /// Publishing itself bumps the version by exactly one, so a published
    /// record is dirty once its version is more than one ahead of the
    /// published version.
    fn has_unpublished_changes(&self) -> bool {
        match self.published_version() {
            None => true,
            Some(published) => self.version() > published + 1,
        }
    }

    fn can_publish(&self) -> bool {
        !self.is_deleted()
            && !self.handle().lifecycle().is_archived()
            && (!self.is_published() || self.has_unpublished_changes())
    }

    fn can_unpublish(&self) -> bool {
        self.is_published()
    }

    /// Deleting is blocked while published — unpublish first.
    fn can_delete(&self) -> bool {
        !self.is_deleted() && !self.is_published()
    }

    /// Publishes the record at `version`, defaulting to the current
    /// version. Returns the canonical post-publish view.
    async fn publish(&self, version: Option<u64>) -> ClientResult<Self> {
        let version = version.unwrap_or_else(|| self.version());
        let response = transition_put(self, "published", version).await?;
        self.absorb(response)
    }

    /// Reverts the record to draft.
    async fn unpublish(&self) -> ClientResult<Self> {
        let response = transition_delete(self, "published").await?;
        self.absorb(response)
    }
}

/// Archive capability: the record moves in and out of the archive through
/// its `.../archived` sub-resource.
#[async_trait]
pub trait Archivable: Resource {
    fn archived_version(&self) -> Option<u64> {
        self.handle().lifecycle().archived_version()
    }

    fn is_archived(&self) -> bool {
        !self.is_deleted() && self.archived_version().is_some()
    }

    /// Archiving requires a record that is neither archived nor published.
    fn can_archive(&self) -> bool {
        !self.is_deleted()
            && !self.is_archived()
            && !self.handle().lifecycle().is_published()
    }

    fn can_unarchive(&self) -> bool {
        self.is_archived()
    }

    async fn archive(&self) -> ClientResult<Self> {
        let response = transition_put(self, "archived", self.version()).await?;
        self.absorb(response)
    }

    async fn unarchive(&self) -> ClientResult<Self> {
        let response = transition_delete(self, "archived").await?;
        self.absorb(response)
    }
}
