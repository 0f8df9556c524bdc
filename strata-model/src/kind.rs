use serde::{Deserialize, Serialize};
use std::fmt;

/// The remote type of a record, as carried in `sys.type`.
///
/// Serializes to the exact wire spelling (`"ContentType"`, `"Entry"`, ...),
/// so the derived representation doubles as the wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Space,
    ContentType,
    Entry,
    Asset,
}

impl ResourceKind {
    /// Returns the wire spelling of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Space => "Space",
            ResourceKind::ContentType => "ContentType",
            ResourceKind::Entry => "Entry",
            ResourceKind::Asset => "Asset",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
