//! Spaces: top-level containers for content.

use strata_model::ResourceKind;

use crate::asset::Asset;
use crate::content_type::ContentType;
use crate::context::PersistenceContext;
use crate::entity::{EntityHandle, Resource};
use crate::entry::Entry;
use crate::error::{ClientError, ClientResult};
use crate::factory::ResourceEndpoint;

/// A space: the container one set of content types, entries and assets
/// lives in.
///
/// Each space view owns a root context with a fresh identity map. The three
/// child collections derive from that root, so they share one cache per
/// space while staying isolated from other spaces — entry ids are only
/// unique within a space.
#[derive(Debug, Clone)]
pub struct Space {
    handle: EntityHandle,
    context: PersistenceContext,
    children: Option<PersistenceContext>,
}

impl Resource for Space {
    fn kind() -> ResourceKind {
        ResourceKind::Space
    }

    fn from_parts(handle: EntityHandle, context: PersistenceContext) -> Self {
        let children = handle.id().map(|id| {
            let mut child_root = PersistenceContext::new(context.endpoint(&[id.as_str()]));
            child_root.setup_identity_map();
            child_root
        });
        Self {
            handle,
            context,
            children,
        }
    }

    fn handle(&self) -> &EntityHandle {
        &self.handle
    }

    fn context(&self) -> &PersistenceContext {
        &self.context
    }
}

impl Space {
    /// The space's name, when present.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.document()
            .and_then(|d| d.get_str("/name").map(str::to_string))
    }

    fn child_root(&self) -> ClientResult<&PersistenceContext> {
        self.children.as_ref().ok_or(ClientError::MissingId)
    }

    /// The entries collection of this space.
    pub fn entries(&self) -> ClientResult<ResourceEndpoint<Entry>> {
        Ok(ResourceEndpoint::new(
            self.child_root()?.change_path(&["entries"]),
        ))
    }

    /// The assets collection of this space.
    pub fn assets(&self) -> ClientResult<ResourceEndpoint<Asset>> {
        Ok(ResourceEndpoint::new(
            self.child_root()?.change_path(&["assets"]),
        ))
    }

    /// The content types collection of this space.
    pub fn content_types(&self) -> ClientResult<ResourceEndpoint<ContentType>> {
        Ok(ResourceEndpoint::new(
            self.child_root()?.change_path(&["content_types"]),
        ))
    }
}
