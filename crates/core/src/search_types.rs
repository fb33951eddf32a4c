//! Search request/response types
//!
//! This module defines the boundary contract of the search core:
//! - SearchQuery: free text plus optional provider/category filters
//! - SearchHit: one scored result with a back-pointer to the record
//! - SearchResponse: ordered hits plus execution statistics
//!
//! The transport layer (HTTP, JSON-RPC) builds a SearchQuery from its
//! own request format and serializes the response however it likes;
//! nothing here depends on a transport.

use crate::types::{Category, ComponentRecord, Provider};
use std::sync::Arc;

/// Default maximum result count when a query does not set one
pub const DEFAULT_RESULT_LIMIT: usize = 20;

// ============================================================================
// SearchQuery
// ============================================================================

/// A single search invocation
///
/// `text` may be empty (empty/whitespace-only queries fall back to a
/// full-registry scan); `limit` must be at least 1 or the engine
/// rejects the query with `Error::InvalidLimit`.
///
/// # Examples
///
/// ```
/// use uicatalog_core::{Provider, SearchQuery};
///
/// let query = SearchQuery::new("animated button")
///     .with_provider(Provider::MagicUi)
///     .with_limit(5);
///
/// assert_eq!(query.text, "animated button");
/// assert_eq!(query.limit, 5);
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Raw search text (fuzzy, case-insensitive)
    pub text: String,

    /// Optional: restrict results to one provider (exact match)
    pub provider: Option<Provider>,

    /// Optional: restrict results to one category (exact match)
    pub category: Option<Category>,

    /// Maximum results to return
    pub limit: usize,
}

impl SearchQuery {
    /// Create a query with default limit and no filters
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery {
            text: text.into(),
            provider: None,
            category: None,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Builder: restrict to a provider
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Builder: restrict to a category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Builder: set the result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

// ============================================================================
// SearchHit
// ============================================================================

/// A single search result
///
/// Holds a shared pointer to the matched record, the relevance score,
/// and the 1-indexed rank in the result set. Ephemeral: created per
/// search call, never persisted.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The matched component record
    pub record: Arc<ComponentRecord>,

    /// Relevance score (higher = more relevant, non-negative)
    pub score: f32,

    /// Rank in result set (1-indexed)
    pub rank: u32,
}

impl SearchHit {
    /// Create a new SearchHit
    pub fn new(record: Arc<ComponentRecord>, score: f32, rank: u32) -> Self {
        SearchHit {
            record,
            score,
            rank,
        }
    }
}

// ============================================================================
// SearchStats
// ============================================================================

/// Execution statistics for a search
///
/// Metadata about how the search executed, for debugging and logging.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Time spent in search (microseconds)
    pub elapsed_micros: u64,

    /// Candidates gathered before filtering and scoring
    pub candidates_considered: usize,

    /// Whether the inverted index was consulted (vs. full scan)
    pub index_used: bool,
}

impl SearchStats {
    /// Create new SearchStats
    pub fn new(elapsed_micros: u64, candidates_considered: usize) -> Self {
        SearchStats {
            elapsed_micros,
            candidates_considered,
            index_used: false,
        }
    }

    /// Builder: set index_used flag
    pub fn with_index_used(mut self, used: bool) -> Self {
        self.index_used = used;
        self
    }
}

// ============================================================================
// SearchResponse
// ============================================================================

/// Ordered search results
///
/// Hits are sorted non-increasing by score; ties keep registry
/// insertion order. `hits.len()` never exceeds the query limit.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Ranked hits (highest score first)
    pub hits: Vec<SearchHit>,

    /// Execution statistics
    pub stats: SearchStats,
}

impl SearchResponse {
    /// Create an empty response
    pub fn empty() -> Self {
        SearchResponse {
            hits: vec![],
            stats: SearchStats::default(),
        }
    }

    /// Create a new response
    pub fn new(hits: Vec<SearchHit>, stats: SearchStats) -> Self {
        SearchResponse { hits, stats }
    }

    /// Check if response has no hits
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of hits
    pub fn len(&self) -> usize {
        self.hits.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ComponentRecord, Provider};

    fn test_record() -> Arc<ComponentRecord> {
        Arc::new(
            ComponentRecord::new(Provider::Shadcn, "button", "Button", Category::Buttons).unwrap(),
        )
    }

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new("button");
        assert_eq!(query.text, "button");
        assert_eq!(query.limit, DEFAULT_RESULT_LIMIT);
        assert!(query.provider.is_none());
        assert!(query.category.is_none());
    }

    #[test]
    fn test_query_builder() {
        let query = SearchQuery::new("button")
            .with_provider(Provider::Shadcn)
            .with_category(Category::Buttons)
            .with_limit(5);
        assert_eq!(query.provider, Some(Provider::Shadcn));
        assert_eq!(query.category, Some(Category::Buttons));
        assert_eq!(query.limit, 5);
    }

    #[test]
    fn test_search_hit_new() {
        let hit = SearchHit::new(test_record(), 95.5, 1);
        assert_eq!(hit.record.name, "Button");
        assert!((hit.score - 95.5).abs() < f32::EPSILON);
        assert_eq!(hit.rank, 1);
    }

    #[test]
    fn test_search_stats() {
        let stats = SearchStats::new(1200, 42).with_index_used(true);
        assert_eq!(stats.elapsed_micros, 1200);
        assert_eq!(stats.candidates_considered, 42);
        assert!(stats.index_used);
    }

    #[test]
    fn test_search_response_empty() {
        let response = SearchResponse::empty();
        assert!(response.is_empty());
        assert_eq!(response.len(), 0);
    }

    #[test]
    fn test_search_response_new() {
        let hits = vec![
            SearchHit::new(test_record(), 0.9, 1),
            SearchHit::new(test_record(), 0.8, 2),
        ];
        let response = SearchResponse::new(hits, SearchStats::new(10, 2));
        assert_eq!(response.len(), 2);
        assert!(!response.is_empty());
    }
}
