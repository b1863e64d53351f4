//! Input collection against the interactive prompt collaborator.
//!
//! # Responsibility
//! - Define the `Prompter` interface shells implement.
//! - Turn prompt answers into validated requests, or `None` when cancelled.
//!
//! # Invariants
//! - Collection never touches storage.
//! - Blank text answers are treated the same as absent answers.
//! - An integer answer of `0` is a value, not an absence.

use crate::model::book::{BookId, BookPatch, NewBook};
use crate::service::catalog_service::UpdateRequest;

/// Modal input mechanism supplied by the shell.
///
/// Both methods return `None` when the user cancels or supplies nothing.
pub trait Prompter {
    fn ask_text(&mut self, title: &str, message: &str) -> Option<String>;
    fn ask_integer(&mut self, title: &str, message: &str) -> Option<i64>;
}

/// Collects title, author and year for a new book.
///
/// Stops at the first absent answer.
pub fn collect_add(prompter: &mut dyn Prompter) -> Option<NewBook> {
    let title = present_text(prompter.ask_text("Add Book", "Enter book title:"))?;
    let author = present_text(prompter.ask_text("Add Book", "Enter book author:"))?;
    let year = prompter.ask_integer("Add Book", "Enter publication year:")?;
    Some(NewBook {
        title,
        author,
        year,
    })
}

pub fn collect_remove(prompter: &mut dyn Prompter) -> Option<BookId> {
    prompter.ask_integer("Remove Book", "Enter book ID to remove:")
}

pub fn collect_search(prompter: &mut dyn Prompter) -> Option<String> {
    present_text(prompter.ask_text("Search Books", "Enter title or author to search:"))
}

/// Collects a target id and optional replacements.
///
/// Only the id is required; each replacement may be left blank.
pub fn collect_update(prompter: &mut dyn Prompter) -> Option<UpdateRequest> {
    let id = prompter.ask_integer("Update Book", "Enter book ID to update:")?;
    let title = present_text(prompter.ask_text(
        "Update Book",
        "Enter new title (leave blank to keep current):",
    ));
    let author = present_text(prompter.ask_text(
        "Update Book",
        "Enter new author (leave blank to keep current):",
    ));
    let year = prompter.ask_integer(
        "Update Book",
        "Enter new year (leave blank to keep current):",
    );

    Some(UpdateRequest {
        id,
        patch: BookPatch {
            title,
            author,
            year,
        },
    })
}

fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
