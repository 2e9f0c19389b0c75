//! Library construction options.

/// Options applied when building a [`crate::core::library::Library`].
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Record a [`crate::events::CatalogEvent`] for every change. Off by
    /// default; when on, the caller must drain the journal.
    pub record_events: bool,
    /// Initial capacity of the book list.
    pub books_capacity: usize,
    /// Initial capacity of the member list.
    pub members_capacity: usize,
    /// Initial capacity of the staff list.
    pub staff_capacity: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            record_events: false,
            books_capacity: 0,
            members_capacity: 0,
            staff_capacity: 0,
        }
    }
}
