//! Persistence contexts: a request base path bound to a shared cache.

use crate::entity::EntityHandle;
use crate::identity_map::SharedIdentityMap;
use crate::request::Request;

/// Binds a request base path to an optional shared identity map.
///
/// Contexts derived with [`change_path`](Self::change_path) or
/// [`with_endpoint`](Self::with_endpoint) keep the same map reference —
/// that sharing is what lets a space's entries, assets and content types
/// observe one cache. A context without a map passes records through
/// uncached, which is intentional for transient nested reads.
#[derive(Debug, Clone)]
pub struct PersistenceContext {
    base: Request,
    identity_map: Option<SharedIdentityMap>,
}

impl PersistenceContext {
    /// Creates a context over a base request, without a cache.
    #[must_use]
    pub fn new(base: Request) -> Self {
        Self {
            base,
            identity_map: None,
        }
    }

    /// Lazily creates the identity map. Idempotent — an existing map is
    /// never replaced.
    pub fn setup_identity_map(&mut self) {
        if self.identity_map.is_none() {
            self.identity_map = Some(SharedIdentityMap::new());
        }
    }

    /// The context's identity map, if caching is enabled.
    #[must_use]
    pub fn identity_map(&self) -> Option<&SharedIdentityMap> {
        self.identity_map.as_ref()
    }

    /// Request scoped to the context's base path plus `segments`.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Request {
        self.base.paths(segments)
    }

    /// The context's base request, unscoped.
    #[must_use]
    pub fn base_request(&self) -> Request {
        self.base.clone()
    }

    /// Derives a context at a sub-path, sharing this context's map.
    #[must_use]
    pub fn change_path(&self, segments: &[&str]) -> Self {
        Self {
            base: self.base.paths(segments),
            identity_map: self.identity_map.clone(),
        }
    }

    /// Derives a context over an explicit base request, sharing this
    /// context's map.
    #[must_use]
    pub fn with_endpoint(&self, base: Request) -> Self {
        Self {
            base,
            identity_map: self.identity_map.clone(),
        }
    }

    /// Registers a record with the cache and returns the canonical handle;
    /// without a map the record passes through unchanged.
    pub fn store(&self, handle: EntityHandle) -> EntityHandle {
        match &self.identity_map {
            Some(map) => map.store(handle),
            None => handle,
        }
    }
}
