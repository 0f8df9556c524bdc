//! Collection envelopes for list endpoints.

use std::ops::Deref;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// A page of records from a list endpoint.
///
/// Derefs to its item slice so it reads like a plain array while still
/// carrying the pagination envelope: `total` always, `skip`/`limit` when
/// the server sends them.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    items: Vec<R>,
    pub total: u64,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl<R> Collection<R> {
    pub(crate) fn new(items: Vec<R>, total: u64, skip: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            items,
            total,
            skip,
            limit,
        }
    }

    /// The records in this page.
    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Consumes the collection, returning its records.
    #[must_use]
    pub fn into_items(self) -> Vec<R> {
        self.items
    }
}

impl<R> Deref for Collection<R> {
    type Target = [R];

    fn deref(&self) -> &[R] {
        &self.items
    }
}

impl<R> IntoIterator for Collection<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Raw list envelope: `{sys: {type: "Array"}, items, total, skip?, limit?}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub(crate) sys: EnvelopeSys,
    #[serde(default)]
    pub(crate) items: Vec<Value>,
    #[serde(default)]
    pub(crate) total: u64,
    #[serde(default)]
    pub(crate) skip: Option<u64>,
    #[serde(default)]
    pub(crate) limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnvelopeSys {
    #[serde(rename = "type")]
    pub(crate) kind: String,
}

impl Envelope {
    /// Decodes a list response. Anything that is not an `Array` envelope —
    /// including a single-record response — fails loudly instead of
    /// degrading silently.
    pub(crate) fn decode(value: Value) -> ClientResult<Envelope> {
        let envelope: Envelope = serde_json::from_value(value)?;
        if envelope.sys.kind != "Array" {
            return Err(ClientError::NotACollection(envelope.sys.kind));
        }
        Ok(envelope)
    }
}
