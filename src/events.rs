//! Library change journal payloads.

use crate::types::{BookHandle, MemberHandle, StaffHandle};

/// Events recorded by [`crate::core::library::Library`] as it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A book was appended.
    BookAdded {
        /// Handle of the new book.
        handle: BookHandle,
    },
    /// A member was appended.
    MemberAdded {
        /// Handle of the new member.
        handle: MemberHandle,
    },
    /// A staff member was appended.
    StaffAdded {
        /// Handle of the new staff member.
        handle: StaffHandle,
    },
    /// A book was checked out.
    BookCheckedOut {
        /// Handle of the book.
        handle: BookHandle,
    },
    /// A book was returned.
    BookReturned {
        /// Handle of the book.
        handle: BookHandle,
    },
}
