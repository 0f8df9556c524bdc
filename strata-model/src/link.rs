use serde::{Deserialize, Serialize};

use crate::Error;

/// A reference to another record, e.g. `sys.createdBy` pointing at a User.
///
/// On the wire a link is a nested envelope:
/// `{"sys": {"type": "Link", "linkType": "User", "id": "..."}}`.
/// The typed form keeps only the parts that matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLink", into = "RawLink")]
pub struct Link {
    /// The remote type the link points at (`"User"`, `"Space"`, ...).
    pub link_type: String,
    /// The id of the linked record.
    pub id: String,
}

impl Link {
    /// Creates a link to a record of the given remote type.
    #[must_use]
    pub fn new(link_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            link_type: link_type.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawLink {
    sys: RawLinkSys,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawLinkSys {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "linkType")]
    link_type: String,
    id: String,
}

impl TryFrom<RawLink> for Link {
    type Error = Error;

    fn try_from(raw: RawLink) -> Result<Self, Error> {
        if raw.sys.kind != "Link" {
            return Err(Error::NotALink(raw.sys.kind));
        }
        Ok(Link {
            link_type: raw.sys.link_type,
            id: raw.sys.id,
        })
    }
}

impl From<Link> for RawLink {
    fn from(link: Link) -> Self {
        RawLink {
            sys: RawLinkSys {
                kind: "Link".to_string(),
                link_type: link.link_type,
                id: link.id,
            },
        }
    }
}
