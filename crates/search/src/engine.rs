//! Search orchestration
//!
//! SearchEngine ties the pieces together: query tokenization,
//! candidate gathering via the inverted index, provider/category
//! filtering, scoring, stable ranking, and truncation.
//!
//! The engine is stateless per request. Registry and index live in an
//! immutable snapshot behind a swappable pointer: `reload` builds the
//! new index fully, then publishes it in one swap, so concurrent
//! readers never observe a partially built index.

use crate::index::{InvertedIndex, FUZZY_TERM_MIN_RATIO};
use crate::scorer::{RelevanceScorer, Scorer, ScorerWeights};
use crate::tokenizer::tokenize_unique;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uicatalog_core::{Error, Result, SearchHit, SearchQuery, SearchResponse, SearchStats};
use uicatalog_registry::ComponentRegistry;

// ============================================================================
// Snapshot
// ============================================================================

/// An immutable registry + index pair
///
/// Built once, never mutated; the engine swaps whole snapshots.
struct Snapshot {
    registry: Arc<ComponentRegistry>,
    index: InvertedIndex,
}

impl Snapshot {
    fn build(registry: Arc<ComponentRegistry>) -> Self {
        let index = InvertedIndex::build(&registry);
        Snapshot { registry, index }
    }
}

// ============================================================================
// SearchEngine
// ============================================================================

/// The public search operation over a component catalog
///
/// # Flow
///
/// 1. Validate the limit
/// 2. Tokenize query text (same tokenizer the index uses)
/// 3. Gather candidates: index union, or full scan for empty queries
/// 4. Apply exact provider/category filters
/// 5. Score survivors against the full raw query text
/// 6. Stable-sort by score descending, truncate, assign ranks
///
/// # Concurrency
///
/// `search` takes a snapshot pointer and works on immutable data, so
/// any number of threads may search concurrently while `reload`
/// publishes a new snapshot.
pub struct SearchEngine {
    snapshot: RwLock<Arc<Snapshot>>,
    scorer: Arc<dyn Scorer>,
}

impl SearchEngine {
    /// Create an engine over a registry, building the index
    ///
    /// Uses RelevanceScorer with default weights.
    pub fn new(registry: Arc<ComponentRegistry>) -> Self {
        SearchEngine {
            snapshot: RwLock::new(Arc::new(Snapshot::build(registry))),
            scorer: Arc::new(RelevanceScorer::default()),
        }
    }

    /// Builder: set a custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: use RelevanceScorer with custom weights
    pub fn with_weights(self, weights: ScorerWeights) -> Self {
        self.with_scorer(Arc::new(RelevanceScorer::new(weights)))
    }

    /// The registry backing the current snapshot
    pub fn registry(&self) -> Arc<ComponentRegistry> {
        self.snapshot.read().registry.clone()
    }

    /// Autocomplete suggestions for a partial query
    ///
    /// Returns up to `limit` distinct component names: names starting
    /// with the prefix first, then names merely containing it, each
    /// group in registry insertion order. Matching is case-insensitive.
    /// An empty prefix yields no suggestions.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<String>> {
        if limit == 0 {
            return Err(Error::InvalidLimit(limit));
        }
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Ok(vec![]);
        }
        let snapshot = self.snapshot.read().clone();

        let mut suggestions: Vec<String> = Vec::new();
        for record in snapshot.registry.iter() {
            if suggestions.len() >= limit {
                break;
            }
            if record.name.to_lowercase().starts_with(&prefix)
                && !suggestions.contains(&record.name)
            {
                suggestions.push(record.name.clone());
            }
        }
        // Backfill with names containing the prefix elsewhere
        if suggestions.len() < limit {
            for record in snapshot.registry.iter() {
                if suggestions.len() >= limit {
                    break;
                }
                if record.name.to_lowercase().contains(&prefix)
                    && !suggestions.contains(&record.name)
                {
                    suggestions.push(record.name.clone());
                }
            }
        }
        Ok(suggestions)
    }

    /// Replace the catalog
    ///
    /// The new index is built completely before the snapshot pointer
    /// swaps; in-flight searches finish against the old snapshot.
    pub fn reload(&self, registry: Arc<ComponentRegistry>) {
        let snapshot = Arc::new(Snapshot::build(registry));
        info!(components = snapshot.registry.len(), "catalog reloaded");
        *self.snapshot.write() = snapshot;
    }

    /// Execute a search
    ///
    /// Fails with `Error::InvalidLimit` when `query.limit` is 0; an
    /// empty registry or a query matching nothing yields an empty
    /// response, not an error.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        if query.limit == 0 {
            return Err(Error::InvalidLimit(query.limit));
        }

        let start = Instant::now();
        let snapshot = self.snapshot.read().clone();

        let tokens = tokenize_unique(&query.text);
        let index_used = !tokens.is_empty();

        // Empty/whitespace-only queries have nothing to index-match
        // against; fall back to the full registry.
        let ordinals: Vec<usize> = if index_used {
            snapshot.index.candidates_fuzzy(&tokens, FUZZY_TERM_MIN_RATIO)
        } else {
            (0..snapshot.registry.len()).collect()
        };
        let candidates_considered = ordinals.len();

        let mut hits: Vec<SearchHit> = Vec::with_capacity(ordinals.len().min(query.limit));
        for ordinal in ordinals {
            let record = match snapshot.registry.record_at(ordinal) {
                Some(record) => record,
                None => continue,
            };
            if let Some(provider) = query.provider {
                if record.provider != provider {
                    continue;
                }
            }
            if let Some(category) = query.category {
                if record.category != category {
                    continue;
                }
            }
            // Score with the full raw query text, not the tokens, so
            // the scorer's substring/fuzzy logic sees the whole string.
            let score = self.scorer.score(record, &query.text);
            hits.push(SearchHit::new(record.clone(), score, 0));
        }

        // Candidates arrive in insertion order; a stable sort keeps
        // that order for equal scores.
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(query.limit);
        for (i, hit) in hits.iter_mut().enumerate() {
            hit.rank = (i + 1) as u32;
        }

        let stats = SearchStats::new(start.elapsed().as_micros() as u64, candidates_considered)
            .with_index_used(index_used);

        debug!(
            query = %query.text,
            candidates = stats.candidates_considered,
            hits = hits.len(),
            elapsed_micros = stats.elapsed_micros,
            "search complete"
        );

        Ok(SearchResponse::new(hits, stats))
    }
}

// ============================================================================
// Registry Extension
// ============================================================================

/// Extension trait adding `.search_engine()` to `Arc<ComponentRegistry>`
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use uicatalog_core::SearchQuery;
/// use uicatalog_registry::builtin_catalog;
/// use uicatalog_search::RegistrySearchExt;
///
/// let registry = Arc::new(builtin_catalog()?);
/// let engine = registry.search_engine();
/// let response = engine.search(&SearchQuery::new("button"))?;
/// assert!(!response.is_empty());
/// # Ok::<(), uicatalog_core::Error>(())
/// ```
pub trait RegistrySearchExt {
    /// Build a search engine over this registry
    fn search_engine(&self) -> SearchEngine;
}

impl RegistrySearchExt for Arc<ComponentRegistry> {
    fn search_engine(&self) -> SearchEngine {
        SearchEngine::new(Arc::clone(self))
    }
}

// ============================================================================
// Tests
// ============================================================================
