//! Versioned serde model of a whole library.

use serde::{Deserialize, Serialize};

use crate::{
    book::Book,
    error::CatalogResult,
    person::{Member, Staff},
};

/// Version number written into every [`LibrarySnapshotV1`].
pub const SNAPSHOT_FORMAT_VERSION: u16 = 1;

/// Point-in-time copy of every collection, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySnapshotV1 {
    /// Payload format version.
    pub format_version: u16,
    /// Books, checkout flags included.
    pub books: Vec<Book>,
    /// Registered members.
    pub members: Vec<Member>,
    /// Staff roster.
    pub staff: Vec<Staff>,
}

impl LibrarySnapshotV1 {
    /// Builds a snapshot stamped with [`SNAPSHOT_FORMAT_VERSION`].
    pub fn new(books: Vec<Book>, members: Vec<Member>, staff: Vec<Staff>) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            books,
            members,
            staff,
        }
    }

    /// Encodes the snapshot as pretty JSON.
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a snapshot from JSON. The version is checked on import, not here.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
