//! Core catalog logic for Booklog.
//! This crate is the single source of truth for storage and catalog rules.

pub mod config;
pub mod db;
pub mod input;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{CatalogConfig, DEFAULT_DB_FILE_NAME};
pub use input::{collect_add, collect_remove, collect_search, collect_update, Prompter};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Book, BookId, BookPatch, BookValidationError, CatalogReport, NewBook};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use service::action::{run_action, ActionResult, CatalogAction};
pub use service::catalog_service::{
    CatalogError, CatalogResult, CatalogService, Outcome, UpdateRequest,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
