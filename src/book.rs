//! Book record and checkout toggles.

use serde::{Deserialize, Serialize};

use crate::{core::listing::Describe, types::Genre};

/// A catalogued book.
///
/// Fields are stored exactly as given; empty strings are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    genre: Genre,
    title: String,
    author: String,
    isbn: String,
    is_checked_out: bool,
}

impl Book {
    /// Creates a book that is not checked out.
    pub fn new(
        genre: Genre,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            genre,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            is_checked_out: false,
        }
    }

    /// Shorthand for a [`Genre::Fiction`] book.
    pub fn fiction(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::new(Genre::Fiction, title, author, isbn)
    }

    /// Shorthand for a [`Genre::NonFiction`] book.
    pub fn non_fiction(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::new(Genre::NonFiction, title, author, isbn)
    }

    /// Marks the book as checked out. Already checked out stays checked out.
    pub fn check_out(&mut self) {
        self.is_checked_out = true;
    }

    /// Marks the book as back on the shelf.
    pub fn return_book(&mut self) {
        self.is_checked_out = false;
    }

    /// Book genre.
    pub fn genre(&self) -> Genre {
        self.genre
    }

    /// Book title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Book author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// ISBN as given, unvalidated.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// True while the book is checked out.
    pub fn is_checked_out(&self) -> bool {
        self.is_checked_out
    }
}

impl Describe for Book {
    fn describe(&self) -> String {
        format!("{}: {} by {}", self.genre.label(), self.title, self.author)
    }
}
