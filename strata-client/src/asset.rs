//! Assets: media records with per-locale files.

use strata_model::ResourceKind;

use crate::context::PersistenceContext;
use crate::entity::{EntityHandle, Resource};
use crate::error::{ClientError, ClientResult};
use crate::lifecycle::{Archivable, Publishable};
use crate::request::VERSION_HEADER;
use crate::transport::Method;

/// A media asset. The file itself is uploaded out-of-band; `process` asks
/// the backend to materialize it into deliverable form per locale.
#[derive(Debug, Clone)]
pub struct Asset {
    handle: EntityHandle,
    context: PersistenceContext,
}

impl Resource for Asset {
    fn kind() -> ResourceKind {
        ResourceKind::Asset
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

impl Publishable for Asset {}
impl Archivable for Asset {}

impl Asset {
    /// Asks the backend to process the uploaded file for one locale.
    /// Processing always targets a known revision, so the version header is
    /// mandatory here.
    pub async fn process(&self, version: u64, locale: &str) -> ClientResult<()> {
        if self.is_deleted() {
            return Err(ClientError::Deleted);
        }
        self.endpoint()?
            .paths(["files", locale, "process"])
            .put_headers([(VERSION_HEADER, version.to_string())])
            .send(Method::Put)
            .await?;
        Ok(())
    }
}
