//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the catalog operations (initialize, add, list, remove, search,
//!   update, report) over one configured store.
//! - Render results as display text, with typed variants for other callers.
//!
//! # Invariants
//! - Every operation opens its own connection and drops it before returning.
//! - Absent input (`None`) is a cancellation and never touches the store.
//! - Remove/update on a missing id report success; the affected row count is
//!   logged and returned by the typed variants.

use crate::config::CatalogConfig;
use crate::db::{open_db, DbError};
use crate::model::book::{Book, BookId, BookPatch, CatalogReport, NewBook};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
use crate::service::format::{
    added_message, book_listing, report_text, EMPTY_LIBRARY_NOTICE, NO_MATCHES_NOTICE,
    REMOVED_MESSAGE, UPDATED_MESSAGE,
};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Service error surfaced to shells.
#[derive(Debug)]
pub enum CatalogError {
    /// Store could not be opened or bootstrapped.
    Db(DbError),
    /// Statement-level failure or rejected write.
    Repo(RepoError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "catalog storage unavailable: {err}"),
            Self::Repo(err) => write!(f, "catalog operation failed: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<DbError> for CatalogError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of an operation that may be cancelled by missing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Operation ran; the text is meant for display.
    Done(String),
    /// Required input was absent; nothing was read or written.
    Cancelled,
}

/// Target id plus the fields to replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub id: BookId,
    pub patch: BookPatch,
}

/// Catalog operations over one configured store.
#[derive(Debug, Clone)]
pub struct CatalogService {
    config: CatalogConfig,
}

impl CatalogService {
    /// Creates a service bound to one storage location.
    ///
    /// Does not touch storage; call [`CatalogService::initialize`] at startup.
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this service was built with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Creates the store and its schema when missing.
    ///
    /// Safe to call repeatedly; existing rows are preserved.
    pub fn initialize(&self) -> CatalogResult<()> {
        let conn = open_db(self.config.db_path())?;
        drop(conn);
        info!(
            "event=catalog_init module=service status=ok db_path={}",
            self.config.db_path().display()
        );
        Ok(())
    }

    /// Inserts one book and returns its assigned id.
    pub fn add_book(&self, book: &NewBook) -> CatalogResult<BookId> {
        self.with_repo("add", |repo| repo.create_book(book))
    }

    /// Gets one book by id, or `None` when it does not exist.
    pub fn get_book(&self, id: BookId) -> CatalogResult<Option<Book>> {
        self.with_repo("get", |repo| repo.get_book(id))
    }

    /// Lists every book in natural storage order.
    pub fn list_books(&self) -> CatalogResult<Vec<Book>> {
        self.with_repo("list", |repo| repo.list_books())
    }

    /// Lists books whose title or author contains `query`.
    ///
    /// Matching follows SQLite `LIKE`: ASCII case-insensitive, `%` and `_`
    /// act as wildcards.
    pub fn search_books(&self, query: &str) -> CatalogResult<Vec<Book>> {
        self.with_repo("search", |repo| repo.search_books(query))
    }

    /// Deletes by id and returns the number of rows removed (0 or 1).
    pub fn remove_book(&self, id: BookId) -> CatalogResult<usize> {
        let removed = self.with_repo("remove", |repo| repo.delete_book(id))?;
        if removed == 0 {
            warn!("event=catalog_op module=service op=remove status=noop book_id={id}");
        }
        Ok(removed)
    }

    /// Applies a patch and returns the number of rows matched (0 or 1).
    ///
    /// Blank title/author replacements are dropped before writing.
    pub fn update_book(&self, request: &UpdateRequest) -> CatalogResult<usize> {
        let id = request.id;
        let patch = request.patch.clone().normalized();
        let matched = self.with_repo("update", |repo| repo.update_book(id, &patch))?;
        if matched == 0 {
            warn!(
                "event=catalog_op module=service op=update status=noop book_id={id} fields={}",
                patch_field_count(&patch)
            );
        }
        Ok(matched)
    }

    /// Computes total, per-author and per-year counts.
    pub fn report_stats(&self) -> CatalogResult<CatalogReport> {
        self.with_repo("report", |repo| repo.report())
    }

    /// Adds a book and confirms its title.
    ///
    /// Callers pass input already checked for presence. A `Some` request with
    /// a blank title or author is rejected with `CatalogError::Repo`
    /// (`RepoError::Validation`), not treated as cancelled.
    pub fn add(&self, request: Option<NewBook>) -> CatalogResult<Outcome> {
        let Some(book) = request else {
            return Ok(Outcome::Cancelled);
        };
        self.add_book(&book)?;
        Ok(Outcome::Done(added_message(&book.title)))
    }

    /// Renders every record, or the empty-library notice.
    pub fn list(&self) -> CatalogResult<String> {
        let books = self.list_books()?;
        Ok(book_listing(&books, EMPTY_LIBRARY_NOTICE))
    }

    /// Removes a book by id. A missing id still reports success.
    pub fn remove(&self, id: Option<BookId>) -> CatalogResult<Outcome> {
        let Some(id) = id else {
            return Ok(Outcome::Cancelled);
        };
        self.remove_book(id)?;
        Ok(Outcome::Done(REMOVED_MESSAGE.to_string()))
    }

    /// Renders books whose title or author contains `query`.
    ///
    /// An absent or whitespace-only query is cancelled, the same rule the
    /// input step applies.
    pub fn search(&self, query: Option<String>) -> CatalogResult<Outcome> {
        let Some(query) = query.filter(|text| !text.trim().is_empty()) else {
            return Ok(Outcome::Cancelled);
        };
        let books = self.search_books(&query)?;
        Ok(Outcome::Done(book_listing(&books, NO_MATCHES_NOTICE)))
    }

    /// Applies supplied fields to a book. A missing id still reports success.
    pub fn update(&self, request: Option<UpdateRequest>) -> CatalogResult<Outcome> {
        let Some(request) = request else {
            return Ok(Outcome::Cancelled);
        };
        self.update_book(&request)?;
        Ok(Outcome::Done(UPDATED_MESSAGE.to_string()))
    }

    /// Renders total, per-author and per-year counts.
    pub fn report(&self) -> CatalogResult<String> {
        let report = self.report_stats()?;
        Ok(report_text(&report))
    }

    fn with_repo<T>(
        &self,
        op: &str,
        run: impl FnOnce(&SqliteBookRepository<'_>) -> RepoResult<T>,
    ) -> CatalogResult<T> {
        let started_at = Instant::now();
        let conn = open_db(self.config.db_path())?;
        let repo = SqliteBookRepository::new(&conn);

        match run(&repo) {
            Ok(value) => {
                info!(
                    "event=catalog_op module=service op={op} status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(value)
            }
            Err(err) => {
                error!(
                    "event=catalog_op module=service op={op} status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

fn patch_field_count(patch: &BookPatch) -> usize {
    usize::from(patch.title.is_some())
        + usize::from(patch.author.is_some())
        + usize::from(patch.year.is_some())
}
