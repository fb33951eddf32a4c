//! uicatalog - in-memory search core for a UI component snippet catalog
//!
//! A typed component registry, an inverted keyword index, a fuzzy
//! relevance scorer, and a search engine that ranks catalog entries
//! for free-text queries with optional provider/category filters.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use uicatalog::{builtin_catalog, RegistrySearchExt, SearchQuery};
//!
//! let registry = Arc::new(builtin_catalog()?);
//! let engine = registry.search_engine();
//!
//! let response = engine.search(&SearchQuery::new("animated button"))?;
//! assert!(!response.is_empty());
//! # Ok::<(), uicatalog::Error>(())
//! ```
//!
//! # Architecture
//!
//! The registry is populated once and read-only afterwards; the index
//! is rebuilt wholesale and swapped atomically on reload. Search is a
//! pure function of (registry, index, query), so the transport layer
//! may call it concurrently without locking.

pub use uicatalog_core::*;
pub use uicatalog_registry::*;
pub use uicatalog_search::*;
