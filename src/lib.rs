//! In-memory catalog of a single library's books, members and staff.
//!
//! # Examples
//!
//! Registering entities and listing them into a buffer:
//! ```
//! use libcatalog::{
//!     book::Book,
//!     core::library::Library,
//!     person::{Member, Staff},
//! };
//!
//! let mut library = Library::new();
//! let librarian = Staff::new("Ada", "S-1");
//! library.add_book(Book::fiction("The real one", "F. Bomb", "12345"));
//! librarian.register_member(&mut library, Member::new("Grace", "M-1"));
//! library.add_staff(librarian);
//!
//! let mut out = Vec::new();
//! library.list_books(&mut out).expect("list books");
//! assert_eq!(
//!     String::from_utf8(out).expect("utf8"),
//!     "Books in Library:\nFiction Book: The real one by F. Bomb\n"
//! );
//! ```
//!
//! Exporting a snapshot and restoring it:
//! ```
//! use libcatalog::{book::Book, config::LibraryConfig, core::library::Library};
//!
//! let mut library = Library::new();
//! let handle = library.add_book(Book::non_fiction("Atlas", "Cartographer", "1"));
//! library.check_out(handle).expect("check out");
//!
//! let json = library.export_snapshot().to_json().expect("encode");
//! let snapshot = libcatalog::snapshot::LibrarySnapshotV1::from_json(&json).expect("decode");
//! let restored = Library::from_snapshot(snapshot, LibraryConfig::default()).expect("restore");
//! assert!(restored.book(handle).is_some_and(|b| b.is_checked_out()));
//! ```
#![deny(missing_docs)]

/// Book record and checkout state.
pub mod book;
/// Library construction options.
pub mod config;
/// Library container and listing output.
pub mod core;
/// Crate error type.
pub mod error;
/// Change journal payloads.
pub mod events;
/// Members, staff and the person capability.
pub mod person;
/// Serializable library snapshots.
pub mod snapshot;
/// Shared handle aliases and enums.
pub mod types;
