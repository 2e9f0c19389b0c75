//! In-memory library container and listing helpers.

/// Library container owning books, members and staff.
pub mod library;
/// Describe capability and listing writer.
pub mod listing;
