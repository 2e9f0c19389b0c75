use std::io::Write;

use crate::{
    book::Book,
    config::LibraryConfig,
    error::{CatalogError, CatalogResult},
    events::CatalogEvent,
    person::{Member, Staff},
    snapshot::{LibrarySnapshotV1, SNAPSHOT_FORMAT_VERSION},
    types::{BookHandle, MemberHandle, StaffHandle},
};

use super::listing::{BOOKS_HEADER, MEMBERS_HEADER, STAFF_HEADER, write_listing};

/// Owner of every book, member and staff record, kept in insertion order.
///
/// Collections only grow. Handles returned by the `add_*` methods stay valid
/// for the lifetime of the library.
///
/// With [`LibraryConfig::record_events`] on, every change also appends a
/// [`CatalogEvent`] that is kept until [`Library::drain_events`] takes it, so
/// the journal grows alongside the collections unless the caller drains it.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
    members: Vec<Member>,
    staff: Vec<Staff>,
    events: Vec<CatalogEvent>,
    config: LibraryConfig,
}

impl Library {
    /// Creates an empty library with [`LibraryConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty library using `config`.
    pub fn with_config(config: LibraryConfig) -> Self {
        Self {
            books: Vec::with_capacity(config.books_capacity),
            members: Vec::with_capacity(config.members_capacity),
            staff: Vec::with_capacity(config.staff_capacity),
            events: Vec::new(),
            config,
        }
    }

    /// Rebuilds a library from a snapshot. The event journal starts empty.
    pub fn from_snapshot(
        snapshot: LibrarySnapshotV1,
        config: LibraryConfig,
    ) -> CatalogResult<Self> {
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(CatalogError::UnsupportedSnapshot {
                found: snapshot.format_version,
            });
        }

        tracing::debug!(
            books = snapshot.books.len(),
            members = snapshot.members.len(),
            staff = snapshot.staff.len(),
            "restoring library from snapshot"
        );

        Ok(Self {
            books: snapshot.books,
            members: snapshot.members,
            staff: snapshot.staff,
            events: Vec::new(),
            config,
        })
    }

    /// Copies the current collections into a snapshot.
    pub fn export_snapshot(&self) -> LibrarySnapshotV1 {
        LibrarySnapshotV1::new(
            self.books.clone(),
            self.members.clone(),
            self.staff.clone(),
        )
    }

    /// Appends a book. Duplicate ISBNs are allowed.
    pub fn add_book(&mut self, book: Book) -> BookHandle {
        let handle = self.books.len();
        tracing::debug!(handle, isbn = %book.isbn(), title = %book.title(), "adding book");
        self.books.push(book);
        self.record(CatalogEvent::BookAdded { handle });
        handle
    }

    /// Appends a member.
    pub fn add_member(&mut self, member: Member) -> MemberHandle {
        let handle = self.members.len();
        tracing::debug!(handle, "adding member");
        self.members.push(member);
        self.record(CatalogEvent::MemberAdded { handle });
        handle
    }

    /// Appends a staff member.
    pub fn add_staff(&mut self, staff_member: Staff) -> StaffHandle {
        let handle = self.staff.len();
        tracing::debug!(handle, "adding staff");
        self.staff.push(staff_member);
        self.record(CatalogEvent::StaffAdded { handle });
        handle
    }

    /// Checks out the book at `handle`.
    pub fn check_out(&mut self, handle: BookHandle) -> CatalogResult<()> {
        let book = self
            .books
            .get_mut(handle)
            .ok_or(CatalogError::MissingBook(handle))?;
        book.check_out();
        tracing::debug!(handle, "book checked out");
        self.record(CatalogEvent::BookCheckedOut { handle });
        Ok(())
    }

    /// Returns the book at `handle`.
    pub fn return_book(&mut self, handle: BookHandle) -> CatalogResult<()> {
        let book = self
            .books
            .get_mut(handle)
            .ok_or(CatalogError::MissingBook(handle))?;
        book.return_book();
        tracing::debug!(handle, "book returned");
        self.record(CatalogEvent::BookReturned { handle });
        Ok(())
    }

    /// Book at `handle`, if any.
    pub fn book(&self, handle: BookHandle) -> Option<&Book> {
        self.books.get(handle)
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All members in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// All staff in insertion order.
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// Takes every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<CatalogEvent> {
        std::mem::take(&mut self.events)
    }

    /// Writes the book listing to `out`.
    pub fn list_books<W: Write + ?Sized>(&self, out: &mut W) -> CatalogResult<()> {
        tracing::trace!(count = self.books.len(), "listing books");
        write_listing(out, BOOKS_HEADER, &self.books)?;
        Ok(())
    }

    /// Writes the member listing to `out`.
    pub fn list_members<W: Write + ?Sized>(&self, out: &mut W) -> CatalogResult<()> {
        tracing::trace!(count = self.members.len(), "listing members");
        write_listing(out, MEMBERS_HEADER, &self.members)?;
        Ok(())
    }

    /// Writes the staff listing to `out`.
    pub fn list_staff<W: Write + ?Sized>(&self, out: &mut W) -> CatalogResult<()> {
        tracing::trace!(count = self.staff.len(), "listing staff");
        write_listing(out, STAFF_HEADER, &self.staff)?;
        Ok(())
    }

    /// [`Self::list_books`] to stdout.
    pub fn print_books(&self) -> CatalogResult<()> {
        self.list_books(&mut std::io::stdout().lock())
    }

    /// [`Self::list_members`] to stdout.
    pub fn print_members(&self) -> CatalogResult<()> {
        self.list_members(&mut std::io::stdout().lock())
    }

    /// [`Self::list_staff`] to stdout.
    pub fn print_staff(&self) -> CatalogResult<()> {
        self.list_staff(&mut std::io::stdout().lock())
    }

    fn record(&mut self, event: CatalogEvent) {
        if self.config.record_events {
            self.events.push(event);
        }
    }
}
