//! The identity map: one canonical in-memory record per remote identity.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use strata_model::Identity;

use crate::entity::EntityHandle;

/// Cache mapping a canonical identity to the single live record
/// representing it.
///
/// There is no eviction and no size bound — the map grows for the lifetime
/// of its root context, which is acceptable for a single user session.
/// Processes embedding this in something long-lived need their own
/// eviction story on top.
#[derive(Debug, Default)]
pub struct IdentityMap {
    entries: HashMap<Identity, EntityHandle>,
}

impl IdentityMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates by version, returning the canonical handle.
    ///
    /// A record without an identity passes through uncached. When an entry
    /// already exists, the incoming document replaces the cached one only
    /// if the cached version is not ahead — last writer wins by version
    /// number, not by arrival order. The existing handle is always the one
    /// returned.
    pub fn store(&mut self, incoming: EntityHandle) -> EntityHandle {
        let Some(identity) = incoming.identity() else {
            return incoming;
        };
        match self.entries.get(&identity) {
            None => {
                self.entries.insert(identity, incoming.clone());
                incoming
            }
            Some(existing) => {
                let existing = existing.clone();
                if !existing.same_instance(&incoming) && existing.version() <= incoming.version() {
                    if let Some(document) = incoming.document() {
                        existing.update(document);
                    }
                }
                existing
            }
        }
    }

    /// Looks up the canonical handle for an identity.
    #[must_use]
    pub fn get(&self, identity: &Identity) -> Option<EntityHandle> {
        self.entries.get(identity).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared, clonable reference to one identity map.
///
/// Derived contexts clone this handle, so every context derived from one
/// root observes the same cache.
#[derive(Debug, Clone, Default)]
pub struct SharedIdentityMap {
    inner: Arc<Mutex<IdentityMap>>,
}

impl SharedIdentityMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`IdentityMap::store`].
    pub fn store(&self, incoming: EntityHandle) -> EntityHandle {
        self.lock().store(incoming)
    }

    /// See [`IdentityMap::get`].
    #[must_use]
    pub fn get(&self, identity: &Identity) -> Option<EntityHandle> {
        self.lock().get(identity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether two references point at the same underlying map.
    #[must_use]
    pub fn same_map(&self, other: &SharedIdentityMap) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // A poisoned lock only means a panic mid-store; the map is still
    // structurally sound.
    fn lock(&self) -> MutexGuard<'_, IdentityMap> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
