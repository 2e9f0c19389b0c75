//! Library members and staff.

use serde::{Deserialize, Serialize};

use crate::{
    book::Book,
    core::{library::Library, listing::Describe},
    types::{BookHandle, MemberHandle},
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Member {}
    impl Sealed for super::Staff {}
}

/// Someone known to the library by name and id.
///
/// Sealed: [`Member`] and [`Staff`] are the only implementors.
///
/// ```compile_fail
/// use libcatalog::{core::listing::Describe, person::Person};
///
/// struct Visitor;
///
/// impl Describe for Visitor {
///     fn describe(&self) -> String {
///         "Visitor".to_string()
///     }
/// }
///
/// impl Person for Visitor {
///     fn name(&self) -> &str {
///         "guest"
///     }
///
///     fn id(&self) -> &str {
///         "V-1"
///     }
/// }
/// ```
pub trait Person: sealed::Sealed + Describe {
    /// Display name.
    fn name(&self) -> &str;
    /// Member or staff id, unvalidated.
    fn id(&self) -> &str;
}

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    name: String,
    id: String,
}

impl Member {
    /// Creates a member from a name and member id.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

impl Person for Member {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Describe for Member {
    fn describe(&self) -> String {
        format!("Library Member: {}, ID: {}", self.name, self.id)
    }
}

/// A library staff member, able to register books and members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    name: String,
    id: String,
}

impl Staff {
    /// Creates a staff member from a name and staff id.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Registers `member` in `library`. Same effect as [`Library::add_member`].
    pub fn register_member(&self, library: &mut Library, member: Member) -> MemberHandle {
        tracing::debug!(staff_id = %self.id, member_id = %member.id, "staff registering member");
        library.add_member(member)
    }

    /// Registers `book` in `library`. Same effect as [`Library::add_book`].
    pub fn register_book(&self, library: &mut Library, book: Book) -> BookHandle {
        tracing::debug!(staff_id = %self.id, isbn = %book.isbn(), "staff registering book");
        library.add_book(book)
    }
}

impl Person for Staff {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Describe for Staff {
    fn describe(&self) -> String {
        format!("Library Staff: {}, ID: {}", self.name, self.id)
    }
}
