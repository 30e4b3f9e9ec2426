use crate::link_id::LinkId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored mapping from a short id to its target.
///
/// Links are never updated in place: they are created by the allocator,
/// read by lookups and removed by an explicit delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    /// The URL (or URL-like string) the id redirects to.
    pub target: String,
    /// When the link was created, at microsecond precision.
    pub creation_date: Timestamp,
    /// Textual IP address of the client that created the link.
    pub creator_ip: String,
}

impl Link {
    /// Creates a link stamped with the current time.
    pub fn new(id: LinkId, target: impl Into<String>, creator_ip: impl Into<String>) -> Self {
        Self {
            id,
            target: target.into(),
            creation_date: now_micros(),
            creator_ip: creator_ip.into(),
        }
    }
}

/// The current time truncated to whole microseconds.
///
/// Backends persist microseconds, so truncating up front makes a link read
/// back from storage compare equal to the one that was inserted.
pub fn now_micros() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_microsecond(now.as_microsecond()).unwrap_or(now)
}
