//! Runtime configuration for the catalog.

use std::path::{Path, PathBuf};

/// Storage location used when the caller does not supply one.
pub const DEFAULT_DB_FILE_NAME: &str = "library.db";

/// Configuration built once at startup and handed to [`crate::CatalogService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub db_path: PathBuf,
}

impl CatalogConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        self.db_path.as_path()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}
