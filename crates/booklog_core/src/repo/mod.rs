//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `NewBook::validate()` before persistence.
//! - A missing id on update/delete is reported as zero affected rows, never
//!   as an error; the caller owns that policy.

pub mod book_repo;
