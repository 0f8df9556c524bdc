//! The client entry point.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::context::PersistenceContext;
use crate::error::ClientResult;
use crate::factory::ResourceEndpoint;
use crate::request::Request;
use crate::space::Space;
use crate::transport::Transport;

/// Name of the header scoping space creation to an organization.
pub const ORGANIZATION_HEADER: &str = "X-Contentful-Organization";

/// Name of the header declaring an entry's content type at creation.
pub const CONTENT_TYPE_HEADER: &str = "X-Contentful-Content-Type";

/// Binds a transport adapter to a root persistence context.
///
/// The root context keeps its own identity map, so repeated space fetches
/// resolve to the same cached record. Content within a space caches in that
/// space's own map — see [`Space`].
#[derive(Debug, Clone)]
pub struct Client {
    context: PersistenceContext,
}

impl Client {
    /// Creates a client over a transport adapter.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let mut context = PersistenceContext::new(Request::new(transport));
        context.setup_identity_map();
        Self { context }
    }

    /// The root persistence context.
    #[must_use]
    pub fn context(&self) -> &PersistenceContext {
        &self.context
    }

    /// The spaces collection.
    #[must_use]
    pub fn spaces(&self) -> ResourceEndpoint<Space> {
        ResourceEndpoint::new(self.context.change_path(&["spaces"]))
    }

    /// Fetches one space by id.
    pub async fn space(&self, id: &str) -> ClientResult<Space> {
        self.spaces().get_by_id(id).await
    }

    /// Creates a space, optionally scoped to an organization.
    pub async fn create_space(
        &self,
        fields: Map<String, Value>,
        organization_id: Option<&str>,
    ) -> ClientResult<Space> {
        match organization_id {
            Some(org) => {
                self.spaces()
                    .create(fields, &[(ORGANIZATION_HEADER, org)])
                    .await
            }
            None => self.spaces().create(fields, &[]).await,
        }
    }
}
