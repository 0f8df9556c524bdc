use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ResourceKind, Sys};

/// A full record as sent and received over the wire: the `sys` metadata
/// block plus whatever other top-level members the record carries
/// (`fields`, `name`, `displayField`, ...).
///
/// The non-`sys` members stay untyped JSON — their structure is defined by
/// the content model, not by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub sys: Sys,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Creates an empty local document of the given kind.
    #[must_use]
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            sys: Sys::new(kind),
            fields: Map::new(),
        }
    }

    /// Creates a local document of the given kind with initial payload.
    #[must_use]
    pub fn with_fields(kind: ResourceKind, fields: Map<String, Value>) -> Self {
        Self {
            sys: Sys::new(kind),
            fields,
        }
    }

    /// Looks up a payload value by JSON pointer (e.g. `"/name"`,
    /// `"/fields/title/en-US"`). The pointer is relative to the document
    /// root, excluding `sys`.
    pub fn field(&self, pointer: &str) -> Option<&Value> {
        let rest = pointer.strip_prefix('/')?;
        match rest.split_once('/') {
            None => self.fields.get(rest),
            Some((head, tail)) => self.fields.get(head)?.pointer(&format!("/{tail}")),
        }
    }

    /// Extracts a string payload value by JSON pointer.
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.field(pointer).and_then(|v| v.as_str())
    }

    /// Extracts a boolean payload value by JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.field(pointer).and_then(|v| v.as_bool())
    }

    /// Extracts a numeric payload value by JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.field(pointer).and_then(|v| v.as_f64())
    }
}
