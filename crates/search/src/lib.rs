//! Search infrastructure for the uicatalog component catalog
//!
//! This crate provides:
//! - Word tokenizer shared by indexing and queries
//! - Self-contained string similarity (Levenshtein ratio, partial ratio)
//! - Scorer trait and the default RelevanceScorer
//! - InvertedIndex for candidate gathering
//! - SearchEngine orchestrating search and name suggestions
//! - RegistrySearchExt extension trait for the `.search_engine()` accessor
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use uicatalog_core::SearchQuery;
//! use uicatalog_registry::builtin_catalog;
//! use uicatalog_search::RegistrySearchExt;
//!
//! let registry = Arc::new(builtin_catalog()?);
//! let engine = registry.search_engine();
//!
//! let response = engine.search(&SearchQuery::new("animated button").with_limit(5))?;
//! for hit in &response.hits {
//!     println!("{:>2}. {:6.1}  {}", hit.rank, hit.score, hit.record.id);
//! }
//! # Ok::<(), uicatalog_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod index;
pub mod scorer;
pub mod similarity;
pub mod tokenizer;

// Re-export commonly used types
pub use engine::{RegistrySearchExt, SearchEngine};
pub use index::{InvertedIndex, FUZZY_TERM_MIN_RATIO};
pub use scorer::{RelevanceScorer, Scorer, ScorerWeights};
pub use similarity::{levenshtein, partial_ratio, ratio};
pub use tokenizer::{tokenize, tokenize_unique};
