//! The `sys` metadata block and its lifecycle state.
//!
//! The server sends publish/archive state as two optional version fields.
//! Locally they become a tagged enum so that a record cannot be published
//! and archived at the same time; a payload claiming both fails decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Link, ResourceKind};

/// Publish/archive state of a record.
///
/// Deletion is not a `sys` state — it is tracked on the cached record,
/// because the server stops sending any document for a deleted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Never published, never archived.
    #[default]
    Draft,
    /// Published; `published_version` is the version the publish captured.
    Published { published_version: u64 },
    /// Archived; archiving requires the record not be published.
    Archived { archived_version: u64 },
}

impl Lifecycle {
    /// Returns the published version, if published.
    #[must_use]
    pub const fn published_version(&self) -> Option<u64> {
        match self {
            Lifecycle::Published { published_version } => Some(*published_version),
            _ => None,
        }
    }

    /// Returns the archived version, if archived.
    #[must_use]
    pub const fn archived_version(&self) -> Option<u64> {
        match self {
            Lifecycle::Archived { archived_version } => Some(*archived_version),
            _ => None,
        }
    }

    /// Whether the record is currently published.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self, Lifecycle::Published { .. })
    }

    /// Whether the record is currently archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        matches!(self, Lifecycle::Archived { .. })
    }
}

/// Server-managed metadata carried by every record.
///
/// A record fresh off a local constructor has only a `kind`; id, version and
/// timestamps appear once the server has accepted a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSys", into = "RawSys")]
pub struct Sys {
    pub id: Option<String>,
    pub kind: ResourceKind,
    pub version: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<Link>,
    pub updated_by: Option<Link>,
    pub space: Option<Link>,
    /// Link to the content type shaping an entry; absent on other kinds.
    pub content_type: Option<Link>,
    /// Revision stamped onto published content-type snapshots.
    pub revision: Option<u64>,
    pub lifecycle: Lifecycle,
}

impl Sys {
    /// Creates an empty `sys` block for a record that only exists locally.
    #[must_use]
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            id: None,
            kind,
            version: None,
            created_at: None,
            updated_at: None,
            created_by: None,
            updated_by: None,
            space: None,
            content_type: None,
            revision: None,
            lifecycle: Lifecycle::Draft,
        }
    }
}

/// The wire shape of `sys`: flat camelCase fields, all optional except `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: ResourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_by: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_by: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    space: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_type: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revision: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    published_version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    archived_version: Option<u64>,
}

impl TryFrom<RawSys> for Sys {
    type Error = Error;

    fn try_from(raw: RawSys) -> Result<Self, Error> {
        let lifecycle = match (raw.published_version, raw.archived_version) {
            (Some(_), Some(_)) => return Err(Error::PublishedAndArchived),
            (Some(published_version), None) => Lifecycle::Published { published_version },
            (None, Some(archived_version)) => Lifecycle::Archived { archived_version },
            (None, None) => Lifecycle::Draft,
        };
        Ok(Sys {
            id: raw.id,
            kind: raw.kind,
            version: raw.version,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            created_by: raw.created_by,
            updated_by: raw.updated_by,
            space: raw.space,
            content_type: raw.content_type,
            revision: raw.revision,
            lifecycle,
        })
    }
}

impl From<Sys> for RawSys {
    fn from(sys: Sys) -> Self {
        RawSys {
            id: sys.id,
            kind: sys.kind,
            version: sys.version,
            created_at: sys.created_at,
            updated_at: sys.updated_at,
            created_by: sys.created_by,
            updated_by: sys.updated_by,
            space: sys.space,
            content_type: sys.content_type,
            revision: sys.revision,
            published_version: sys.lifecycle.published_version(),
            archived_version: sys.lifecycle.archived_version(),
        }
    }
}
