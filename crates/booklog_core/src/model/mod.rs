//! Catalog domain model.
//!
//! # Responsibility
//! - Define the book record and the request shapes used to create and patch it.
//! - Define the aggregate report shape.
//!
//! # Invariants
//! - Every stored book is identified by a store-assigned `BookId`.
//! - Removal is a hard delete; there are no tombstones.

pub mod book;
