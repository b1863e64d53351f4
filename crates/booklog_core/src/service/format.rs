//! Display text for catalog results.

use crate::model::book::{Book, CatalogReport};
use std::fmt::Write;

pub const EMPTY_LIBRARY_NOTICE: &str = "The library is empty.";
pub const NO_MATCHES_NOTICE: &str = "No books found.";
pub const REMOVED_MESSAGE: &str = "Book removed successfully.";
pub const UPDATED_MESSAGE: &str = "Book updated successfully.";

/// Renders one record as `ID: <id>, Title: <title>, Author: <author>, Year: <year>`.
pub fn book_line(book: &Book) -> String {
    format!(
        "ID: {}, Title: {}, Author: {}, Year: {}",
        book.id, book.title, book.author, book.year
    )
}

/// Renders records one per line, or `notice` when there are none.
pub fn book_listing(books: &[Book], notice: &str) -> String {
    if books.is_empty() {
        return notice.to_string();
    }

    books.iter().map(book_line).collect::<Vec<_>>().join("\n")
}

pub fn added_message(title: &str) -> String {
    format!("Book '{title}' added successfully.")
}

/// Renders the three-section report block.
pub fn report_text(report: &CatalogReport) -> String {
    let mut out = format!("Total Books: {}\n\nBooks by Author:\n", report.total);
    for (author, count) in &report.by_author {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{author}: {count}");
    }
    out.push_str("\nBooks by Year:\n");
    for (year, count) in &report.by_year {
        let _ = writeln!(out, "{year}: {count}");
    }
    out
}
