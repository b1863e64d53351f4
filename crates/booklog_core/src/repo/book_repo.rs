//! Book repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD, substring search and aggregate APIs over `books`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Create paths call `NewBook::validate()` before SQL mutations.
//! - Mutations by id report affected rows instead of failing on a missing id.
//! - Listing and search return rows in natural storage order.

use crate::db::DbError;
use crate::model::book::{Book, BookId, BookPatch, BookValidationError, CatalogReport, NewBook};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT id, title, author, year FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the catalog.
pub trait BookRepository {
    fn create_book(&self, book: &NewBook) -> RepoResult<BookId>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    fn search_books(&self, query: &str) -> RepoResult<Vec<Book>>;
    /// Returns the number of rows matched by `id` (0 or 1), also when the
    /// patch has nothing to apply.
    fn update_book(&self, id: BookId, patch: &BookPatch) -> RepoResult<usize>;
    /// Returns the number of rows removed (0 or 1).
    fn delete_book(&self, id: BookId) -> RepoResult<usize>;
    fn report(&self) -> RepoResult<CatalogReport>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_books(&self, sql: &str, params: impl rusqlite::Params) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn create_book(&self, book: &NewBook) -> RepoResult<BookId> {
        book.validate()?;

        self.conn.execute(
            "INSERT INTO books (title, author, year) VALUES (?1, ?2, ?3);",
            params![book.title.as_str(), book.author.as_str(), book.year],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let books = self.query_books(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"), [id])?;
        Ok(books.into_iter().next())
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.query_books(&format!("{BOOK_SELECT_SQL};"), [])
    }

    fn search_books(&self, query: &str) -> RepoResult<Vec<Book>> {
        self.query_books(
            &format!(
                "{BOOK_SELECT_SQL}
                 WHERE title LIKE '%' || ?1 || '%'
                    OR author LIKE '%' || ?1 || '%';"
            ),
            [query],
        )
    }

    fn update_book(&self, id: BookId, patch: &BookPatch) -> RepoResult<usize> {
        if patch.is_empty() {
            let exists: i64 = self.conn.query_row(
                "SELECT COUNT(*) FROM books WHERE id = ?1;",
                [id],
                |row| row.get(0),
            )?;
            return Ok(usize::from(exists > 0));
        }

        // Field updates commit together, one statement per supplied field.
        let tx = self.conn.unchecked_transaction()?;
        let mut matched = 0;

        if let Some(title) = patch.title.as_deref() {
            matched = matched.max(tx.execute(
                "UPDATE books SET title = ?1 WHERE id = ?2;",
                params![title, id],
            )?);
        }
        if let Some(author) = patch.author.as_deref() {
            matched = matched.max(tx.execute(
                "UPDATE books SET author = ?1 WHERE id = ?2;",
                params![author, id],
            )?);
        }
        if let Some(year) = patch.year {
            matched = matched.max(tx.execute(
                "UPDATE books SET year = ?1 WHERE id = ?2;",
                params![year, id],
            )?);
        }

        tx.commit()?;
        Ok(matched)
    }

    fn delete_book(&self, id: BookId) -> RepoResult<usize> {
        let changed = self.conn.execute("DELETE FROM books WHERE id = ?1;", [id])?;
        Ok(changed)
    }

    fn report(&self) -> RepoResult<CatalogReport> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM books;", [], |row| row.get(0))?;

        let mut stmt = self
            .conn
            .prepare("SELECT author, COUNT(*) FROM books GROUP BY author;")?;
        let mut rows = stmt.query([])?;
        let mut by_author = Vec::new();
        while let Some(row) = rows.next()? {
            let author: String = row.get(0)?;
            by_author.push((author, parse_count(row.get(1)?)?));
        }

        let mut stmt = self
            .conn
            .prepare("SELECT year, COUNT(*) FROM books GROUP BY year;")?;
        let mut rows = stmt.query([])?;
        let mut by_year = Vec::new();
        while let Some(row) = rows.next()? {
            let year: i64 = row.get(0)?;
            by_year.push((year, parse_count(row.get(1)?)?));
        }

        Ok(CatalogReport {
            total: parse_count(total)?,
            by_author,
            by_year,
        })
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    Ok(Book {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        year: row.get("year")?,
    })
}

fn parse_count(value: i64) -> RepoResult<u64> {
    u64::try_from(value).map_err(|_| RepoError::InvalidData(format!("negative count `{value}`")))
}
