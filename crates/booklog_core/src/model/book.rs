//! Book domain model.
//!
//! # Invariants
//! - `id` is assigned by the store, increases monotonically and is never reused.
//! - `title` and `author` are non-empty at creation time.
//! - `year` has no range restriction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate key of a book.
pub type BookId = i64;

/// One persisted catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Publication year. Negative and future values are accepted.
    pub year: i64,
}

/// Validation failure for book write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "book title cannot be empty"),
            Self::EmptyAuthor => write!(f, "book author cannot be empty"),
        }
    }
}

impl Error for BookValidationError {}

/// Fields of a book that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Checks the creation-time invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyAuthor` when the value is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        Ok(())
    }
}

/// Partial replacement for an existing book.
///
/// `None` leaves the stored field unchanged. `Some(0)` for `year` is a real
/// year, not "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}

impl BookPatch {
    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none()
    }

    /// Drops blank text replacements so an empty value never overwrites a
    /// stored title or author.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.filter(|value| !value.trim().is_empty()),
            author: self.author.filter(|value| !value.trim().is_empty()),
            year: self.year,
        }
    }
}

/// Aggregate counts over the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub total: u64,
    /// `(author, count)` in store grouping order.
    pub by_author: Vec<(String, u64)>,
    /// `(year, count)` in store grouping order.
    pub by_year: Vec<(i64, u64)>,
}
