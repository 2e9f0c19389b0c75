//! Shared handle aliases and catalog enums.

use serde::{Deserialize, Serialize};

/// Position of a book in the library's book list.
pub type BookHandle = usize;
/// Position of a member in the library's member list.
pub type MemberHandle = usize;
/// Position of a staff member in the library's staff list.
pub type StaffHandle = usize;

/// Shelf a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    /// Novels, stories and other invented works.
    Fiction,
    /// Factual works.
    NonFiction,
}

impl Genre {
    /// Prefix used when describing a book of this genre.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction Book",
            Self::NonFiction => "Non-Fiction Book",
        }
    }
}
