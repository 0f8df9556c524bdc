//! Entries: units of content shaped by a content type.

use strata_model::ResourceKind;

use crate::context::PersistenceContext;
use crate::entity::{EntityHandle, Resource};
use crate::lifecycle::{Archivable, Publishable};

/// An entry. Carries both lifecycle capabilities: it can be published and
/// archived, though never both at once.
#[derive(Debug, Clone)]
pub struct Entry {
    handle: EntityHandle,
    context: PersistenceContext,
}

impl Resource for Entry {
    fn kind() -> ResourceKind {
        ResourceKind::Entry
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

impl Publishable for Entry {}
impl Archivable for Entry {}

impl Entry {
    /// The id of the content type shaping this entry, when present.
    #[must_use]
    pub fn content_type_id(&self) -> Option<String> {
        self.document()
            .and_then(|d| d.sys.content_type.map(|link| link.id))
    }
}
