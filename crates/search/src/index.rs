//! Inverted keyword index
//!
//! Maps each word token to the sorted set of registry ordinals whose
//! name, description, or tags contain that token. Built wholesale from
//! a registry snapshot; never mutated in place. A registry change
//! means a fresh build published by the engine as an atomic swap.
//!
//! Invariant: every ordinal in a token's posting list belongs to a
//! record that actually contains the token in an indexed field.

use crate::similarity::ratio;
use crate::tokenizer::tokenize;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use uicatalog_registry::ComponentRegistry;

/// Minimum token-to-term similarity for fuzzy candidate expansion
///
/// High enough that only near-typos qualify ("buttn" -> "button")
/// while unrelated terms stay out.
pub const FUZZY_TERM_MIN_RATIO: f32 = 80.0;

/// Word -> record-ordinal inverted index
///
/// Posting lists hold registry insertion positions, sorted ascending,
/// so candidate sets come back in insertion order (the ranking
/// tie-break order) for free.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: FxHashMap<String, Vec<usize>>,
    doc_count: usize,
}

impl InvertedIndex {
    /// Build an index from a registry snapshot
    ///
    /// Deterministic and infallible: tokenization cannot fail for
    /// valid records, and a record with no extractable tokens simply
    /// appears under no terms (reachable only via the engine's
    /// empty-query full scan).
    pub fn build(registry: &ComponentRegistry) -> Self {
        let mut sets: FxHashMap<String, BTreeSet<usize>> = FxHashMap::default();

        for (ordinal, record) in registry.iter().enumerate() {
            let mut insert_tokens = |text: &str| {
                for token in tokenize(text) {
                    sets.entry(token).or_default().insert(ordinal);
                }
            };
            insert_tokens(&record.name);
            insert_tokens(&record.description);
            for tag in &record.tags {
                insert_tokens(tag);
            }
        }

        let postings = sets
            .into_iter()
            .map(|(term, ordinals)| (term, ordinals.into_iter().collect()))
            .collect();

        InvertedIndex {
            postings,
            doc_count: registry.len(),
        }
    }

    /// Posting list for an exact term
    pub fn lookup(&self, term: &str) -> Option<&[usize]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Union of exact posting lists for the given terms
    ///
    /// Returns sorted, deduplicated ordinals (ascending = registry
    /// insertion order).
    pub fn candidates(&self, terms: &[String]) -> Vec<usize> {
        let mut set = BTreeSet::new();
        for term in terms {
            if let Some(ordinals) = self.lookup(term) {
                set.extend(ordinals.iter().copied());
            }
        }
        set.into_iter().collect()
    }

    /// Union of posting lists with fuzzy term expansion
    ///
    /// Besides exact lookups, each query term also pulls in postings
    /// of index terms within `min_ratio` similarity, so a typo like
    /// "buttn" still gathers the "button" postings. The expansion
    /// scans all index terms; acceptable for a catalog-sized term set.
    pub fn candidates_fuzzy(&self, terms: &[String], min_ratio: f32) -> Vec<usize> {
        let mut set = BTreeSet::new();
        for term in terms {
            if let Some(ordinals) = self.lookup(term) {
                set.extend(ordinals.iter().copied());
            }
            for (indexed, ordinals) in &self.postings {
                if indexed != term && ratio(term, indexed) >= min_ratio {
                    set.extend(ordinals.iter().copied());
                }
            }
        }
        set.into_iter().collect()
    }

    /// All indexed terms (unordered)
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of records the index was built over
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uicatalog_core::{Category, ComponentRecord, Provider};

    fn test_registry() -> ComponentRegistry {
        ComponentRegistry::from_records(vec![
            ComponentRecord::new(Provider::Shadcn, "button", "Button", Category::Buttons)
                .unwrap()
                .with_description("Customizable button component")
                .with_tags(vec!["button".into(), "form".into()]),
            ComponentRecord::new(
                Provider::MagicUi,
                "rainbow-button",
                "Rainbow Button",
                Category::Buttons,
            )
            .unwrap()
            .with_description("Animated rainbow button")
            .with_tags(vec!["button".into(), "animated".into()]),
            ComponentRecord::new(Provider::MagicUi, "particles", "Particles", Category::Backgrounds)
                .unwrap()
                .with_description("A particle system for dynamic backgrounds"),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_and_lookup() {
        let index = InvertedIndex::build(&test_registry());

        assert_eq!(index.lookup("button"), Some(&[0, 1][..]));
        assert_eq!(index.lookup("rainbow"), Some(&[1][..]));
        assert_eq!(index.lookup("particles"), Some(&[2][..]));
        assert_eq!(index.lookup("missing"), None);
        assert_eq!(index.doc_count(), 3);
    }

    #[test]
    fn test_tokens_from_all_fields() {
        let index = InvertedIndex::build(&test_registry());

        // name
        assert!(index.lookup("rainbow").is_some());
        // description
        assert!(index.lookup("customizable").is_some());
        // tags
        assert!(index.lookup("animated").is_some());
        assert!(index.lookup("form").is_some());
    }

    #[test]
    fn test_posting_lists_deduplicated() {
        // "button" appears in record 0's name, description, and tags;
        // the posting list must still hold ordinal 0 once
        let index = InvertedIndex::build(&test_registry());
        let postings = index.lookup("button").unwrap();
        assert_eq!(postings.iter().filter(|&&o| o == 0).count(), 1);
    }

    #[test]
    fn test_index_soundness() {
        // Every ordinal under a term corresponds to a record containing
        // that term in name, description, or tags after tokenization
        let registry = test_registry();
        let index = InvertedIndex::build(&registry);

        for term in index.terms() {
            for &ordinal in index.lookup(term).unwrap() {
                let record = registry.record_at(ordinal).unwrap();
                let mut haystack = tokenize(&record.name);
                haystack.extend(tokenize(&record.description));
                for tag in &record.tags {
                    haystack.extend(tokenize(tag));
                }
                assert!(
                    haystack.iter().any(|t| t == term),
                    "index lists {} under {:?} but the record lacks the token",
                    record.id,
                    term
                );
            }
        }
    }

    #[test]
    fn test_candidates_union_sorted() {
        let index = InvertedIndex::build(&test_registry());
        let candidates = index.candidates(&["rainbow".into(), "particles".into()]);
        assert_eq!(candidates, vec![1, 2]);

        let all = index.candidates(&["button".into(), "particles".into()]);
        assert_eq!(all, vec![0, 1, 2]);
    }

    #[test]
    fn test_candidates_unknown_terms() {
        let index = InvertedIndex::build(&test_registry());
        assert!(index.candidates(&["nonexistentword12345".into()]).is_empty());
        assert!(index.candidates(&[]).is_empty());
    }

    #[test]
    fn test_candidates_fuzzy_matches_typo() {
        let index = InvertedIndex::build(&test_registry());

        // "buttn" is not an indexed term but is close to "button"
        assert!(index.lookup("buttn").is_none());
        let candidates = index.candidates_fuzzy(&["buttn".into()], FUZZY_TERM_MIN_RATIO);
        assert_eq!(candidates, vec![0, 1]);
    }

    #[test]
    fn test_candidates_fuzzy_rejects_unrelated() {
        let index = InvertedIndex::build(&test_registry());
        let candidates =
            index.candidates_fuzzy(&["nonexistentword12345".into()], FUZZY_TERM_MIN_RATIO);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ComponentRegistry::new();
        let index = InvertedIndex::build(&registry);
        assert_eq!(index.term_count(), 0);
        assert_eq!(index.doc_count(), 0);
        assert!(index.candidates(&["anything".into()]).is_empty());
    }

    #[test]
    fn test_record_with_no_tokens() {
        // Punctuation-only fields index nothing but the build succeeds
        let registry = ComponentRegistry::from_records(vec![
            ComponentRecord::new(Provider::Shadcn, "dots", "...", Category::Other).unwrap(),
        ])
        .unwrap();
        let index = InvertedIndex::build(&registry);
        assert_eq!(index.term_count(), 0);
        assert_eq!(index.doc_count(), 1);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let registry = test_registry();
        let a = InvertedIndex::build(&registry);
        let b = InvertedIndex::build(&registry);
        assert_eq!(a.term_count(), b.term_count());
        for term in a.terms() {
            assert_eq!(a.lookup(term), b.lookup(term));
        }
    }
}
