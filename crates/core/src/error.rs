//! Error types for the uicatalog workspace
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! All errors are raised synchronously to the immediate caller and none
//! are fatal to the process; the transport layer decides how to surface
//! them (e.g. HTTP 400/404).

use crate::types::ComponentId;
use std::io;
use thiserror::Error;

/// Result type alias for uicatalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the uicatalog search core
#[derive(Debug, Error)]
pub enum Error {
    /// Component id already present in the registry
    #[error("duplicate component id: {0}")]
    DuplicateId(ComponentId),

    /// Component id not present in the registry
    #[error("component not found: {0}")]
    NotFound(ComponentId),

    /// Result limit must be at least 1
    #[error("invalid result limit: {0} (must be >= 1)")]
    InvalidLimit(usize),

    /// Record failed construction-time validation
    #[error("invalid component record: {0}")]
    InvalidRecord(String),

    /// Catalog document could not be parsed
    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    /// Scorer configuration could not be parsed
    #[error("invalid scorer config: {0}")]
    Config(String),

    /// I/O error (catalog file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
