//! CRUD factories for resource collections.

use std::marker::PhantomData;

use serde_json::{Map, Value};

use strata_model::Document;

use crate::collection::{Collection, Envelope};
use crate::context::PersistenceContext;
use crate::entity::{EntityHandle, Resource};
use crate::error::{ClientError, ClientResult};
use crate::query::Query;
use crate::transport::Method;

/// CRUD factory for one resource collection.
///
/// Scoped to a context whose base path is the collection path; every record
/// it materializes registers with that context's identity map, so repeated
/// fetches of one remote id resolve to the same cached record.
#[derive(Clone)]
pub struct ResourceEndpoint<R: Resource> {
    context: PersistenceContext,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceEndpoint<R> {
    pub(crate) fn new(context: PersistenceContext) -> Self {
        Self {
            context,
            _marker: PhantomData,
        }
    }

    /// The context this collection operates in.
    #[must_use]
    pub fn context(&self) -> &PersistenceContext {
        &self.context
    }

    /// Constructs a local record without persisting it. The record has no
    /// identity until a save assigns it an id.
    #[must_use]
    pub fn build(&self, fields: Map<String, Value>) -> R {
        let handle = EntityHandle::new(Document::with_fields(R::kind(), fields));
        R::from_parts(handle, self.context.clone())
    }

    /// Constructs and immediately persists a record. `headers` carries
    /// create-time scoping headers, if any.
    pub async fn create(&self, fields: Map<String, Value>, headers: &[(&str, &str)]) -> ClientResult<R> {
        self.build(fields).save_with(headers).await
    }

    /// Fetches one record by id. Fails fast on an empty id instead of
    /// issuing a request that would 404.
    pub async fn get_by_id(&self, id: &str) -> ClientResult<R> {
        if id.is_empty() {
            return Err(ClientError::MissingId);
        }
        let response = self
            .context
            .endpoint(&[id])
            .reject_empty()
            .send(Method::Get)
            .await?;
        self.wrap(response)
    }

    /// Fetches the collection unfiltered.
    pub async fn get_all(&self) -> ClientResult<Collection<R>> {
        self.get_by_query(Query::new()).await
    }

    /// Fetches the collection filtered by query parameters.
    pub async fn get_by_query(&self, query: Query) -> ClientResult<Collection<R>> {
        let mut request = self.context.base_request();
        if !query.is_empty() {
            request = request.payload(query.to_value());
        }
        let response = request.send(Method::Get).await?;
        self.wrap_collection(response)
    }

    /// Wraps a raw single-record response and registers it with the cache.
    pub(crate) fn wrap(&self, response: Value) -> ClientResult<R> {
        let document: Document = serde_json::from_value(response)?;
        let canonical = self.context.store(EntityHandle::new(document));
        Ok(R::from_parts(canonical, self.context.clone()))
    }

    fn wrap_collection(&self, response: Value) -> ClientResult<Collection<R>> {
        let Envelope {
            sys: _,
            items: raw_items,
            total,
            skip,
            limit,
        } = Envelope::decode(response)?;

        let mut items = Vec::with_capacity(raw_items.len());
        for raw in raw_items {
            items.push(self.wrap(raw)?);
        }
        Ok(Collection::new(items, total, skip, limit))
    }
}
