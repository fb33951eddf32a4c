//! Core types for the uicatalog search engine
//!
//! This crate defines the shared vocabulary used across the workspace:
//! - ComponentRecord and its identifier/enum types
//! - SearchQuery, SearchHit, SearchResponse
//! - The Error enum and Result alias
//!
//! No search logic lives here; see `uicatalog-search` for the engine
//! and `uicatalog-registry` for catalog storage.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod search_types;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use search_types::{SearchHit, SearchQuery, SearchResponse, SearchStats, DEFAULT_RESULT_LIMIT};
pub use types::{Category, ComponentId, ComponentRecord, Provider};
