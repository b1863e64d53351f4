//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the catalog operations.
//! - Render operation results as display text for the shell.
//! - Expose the menu action surface consumed by shells.

pub mod action;
pub mod catalog_service;
pub mod format;
