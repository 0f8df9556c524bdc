use std::fmt;

use crate::ResourceKind;

/// Canonical cache key for a record: `"<Type>.<id>"`, or
/// `"<Type>.published.<id>"` for the published snapshot of a content type.
///
/// Two records with equal identities must resolve to the same in-memory
/// instance within one root context. A record without a persisted id has no
/// identity and is never cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Identity of the working copy of a record.
    #[must_use]
    pub fn new(kind: ResourceKind, id: &str) -> Self {
        Self(format!("{}.{id}", kind.as_str()))
    }

    /// Identity of the published snapshot of a record. The snapshot and the
    /// working copy coexist in the cache under different keys.
    #[must_use]
    pub fn published(kind: ResourceKind, id: &str) -> Self {
        Self(format!("{}.published.{id}", kind.as_str()))
    }

    /// Returns the identity as a string key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
