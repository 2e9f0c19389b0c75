//! Crate error type.

use crate::types::BookHandle;

/// Failures surfaced by catalog operations.
///
/// Registration and describe never fail; these cover output sinks, snapshot
/// encoding and handle lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Writing a listing to the output sink failed.
    #[error("failed to write listing: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot could not be encoded or decoded.
    #[error("snapshot json error: {0}")]
    Json(#[from] serde_json::Error),
    /// No book lives at this handle.
    #[error("no book at handle {0}")]
    MissingBook(BookHandle),
    /// Snapshot was written by an unknown format version.
    #[error("unsupported snapshot format version {found}")]
    UnsupportedSnapshot {
        /// Version found in the payload.
        found: u16,
    },
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
