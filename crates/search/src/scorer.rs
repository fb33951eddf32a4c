//! Relevance scoring
//!
//! This module provides:
//! - Scorer trait for pluggable scoring algorithms
//! - ScorerWeights with TOML-loadable constants
//! - RelevanceScorer default implementation
//!
//! The default scorer combines cheap exact/substring checks with
//! fuzzy edit-distance similarity so near-misses (typos, partial
//! words) still surface, while exact and tag matches dominate.

use crate::similarity::{partial_ratio, ratio};
use serde::{Deserialize, Serialize};
use uicatalog_core::{ComponentRecord, Error, Result};

// ============================================================================
// ScorerWeights
// ============================================================================

/// Scoring constants for RelevanceScorer
///
/// The defaults are not a bit-exact contract; deployments may tune
/// them via TOML. Tests
/// should assert relative orderings, never exact score values.
///
/// ```toml
/// exact_name_bonus = 100.0
/// name_weight = 0.8
/// description_weight = 0.4
/// tag_bonus = 20.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerWeights {
    /// Fixed bonus for case-insensitive full-string name equality
    pub exact_name_bonus: f32,

    /// Multiplier applied to the query/name similarity ratio
    pub name_weight: f32,

    /// Multiplier applied to the query/description partial ratio
    pub description_weight: f32,

    /// Fixed bonus per tag containing the query as a substring
    pub tag_bonus: f32,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        ScorerWeights {
            exact_name_bonus: 100.0,
            name_weight: 0.8,
            description_weight: 0.4,
            tag_bonus: 20.0,
        }
    }
}

impl ScorerWeights {
    /// Parse weights from a TOML document
    ///
    /// Missing fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scorers take a record and the full raw query text and return a
/// non-negative relevance score; higher means more relevant. Scoring
/// must be deterministic: identical inputs produce identical scores.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync for concurrent search invocations.
pub trait Scorer: Send + Sync {
    /// Score a record against a query
    fn score(&self, record: &ComponentRecord, query: &str) -> f32;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// RelevanceScorer
// ============================================================================

/// Default multi-field relevance scorer
///
/// Contributions, applied in fixed order and summed:
/// 1. exact case-insensitive name equality -> `exact_name_bonus`
/// 2. `ratio(query, name) * name_weight`
/// 3. `partial_ratio(query, description) * description_weight`
/// 4. `tag_bonus` per tag containing the query as a substring
///
/// An empty (or whitespace-only) query scores 0 for every record.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    weights: ScorerWeights,
}

impl RelevanceScorer {
    /// Create a scorer with custom weights
    pub fn new(weights: ScorerWeights) -> Self {
        RelevanceScorer { weights }
    }

    /// The weights in effect
    pub fn weights(&self) -> &ScorerWeights {
        &self.weights
    }
}

impl Scorer for RelevanceScorer {
    fn score(&self, record: &ComponentRecord, query: &str) -> f32 {
        let query = query.trim();
        if query.is_empty() {
            return 0.0;
        }

        let query_lower = query.to_lowercase();
        let name_lower = record.name.to_lowercase();
        let mut score = 0.0;

        // 1. Exact name match
        if name_lower == query_lower {
            score += self.weights.exact_name_bonus;
        }

        // 2. Fuzzy name similarity
        score += ratio(&query_lower, &name_lower) * self.weights.name_weight;

        // 3. Best-substring description similarity
        if !record.description.is_empty() {
            let description_lower = record.description.to_lowercase();
            score += partial_ratio(&query_lower, &description_lower) * self.weights.description_weight;
        }

        // 4. Tag substring bonuses, accumulated across tags
        for tag in &record.tags {
            if tag.to_lowercase().contains(&query_lower) {
                score += self.weights.tag_bonus;
            }
        }

        score
    }

    fn name(&self) -> &str {
        "relevance"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uicatalog_core::{Category, Provider};

    fn button() -> ComponentRecord {
        ComponentRecord::new(Provider::Shadcn, "button", "Button", Category::Buttons)
            .unwrap()
            .with_description("Customizable button component")
            .with_tags(vec!["button".into(), "form".into()])
    }

    fn particles() -> ComponentRecord {
        ComponentRecord::new(Provider::MagicUi, "particles", "Particles", Category::Backgrounds)
            .unwrap()
            .with_description("A particle system component for creating dynamic backgrounds.")
            .with_tags(vec!["particles".into(), "background".into()])
    }

    #[test]
    fn test_exact_name_dominates_no_overlap() {
        let scorer = RelevanceScorer::default();
        let exact = scorer.score(&button(), "button");
        let unrelated = scorer.score(&particles(), "button");
        assert!(
            exact > unrelated,
            "exact {exact} should beat unrelated {unrelated}"
        );
        assert!(exact > 100.0, "exact match should clear the fixed bonus");
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let scorer = RelevanceScorer::default();
        let lower = scorer.score(&button(), "button");
        let upper = scorer.score(&button(), "BUTTON");
        assert!((lower - upper).abs() < f32::EPSILON);
    }

    #[test]
    fn test_typo_still_scores() {
        let scorer = RelevanceScorer::default();
        let typo = scorer.score(&button(), "buttn");
        let exact = scorer.score(&button(), "button");
        assert!(typo > 0.0);
        assert!(typo < exact, "typo {typo} should score below exact {exact}");
    }

    #[test]
    fn test_tag_bonuses_accumulate() {
        let scorer = RelevanceScorer::default();
        let one_tag = ComponentRecord::new(Provider::Shadcn, "a", "A", Category::Other)
            .unwrap()
            .with_tags(vec!["grid".into()]);
        let two_tags = ComponentRecord::new(Provider::Shadcn, "b", "B", Category::Other)
            .unwrap()
            .with_tags(vec!["grid".into(), "grid-layout".into()]);

        let s1 = scorer.score(&one_tag, "grid");
        let s2 = scorer.score(&two_tags, "grid");
        assert!(s2 > s1, "two matching tags {s2} should beat one {s1}");
    }

    #[test]
    fn test_description_contributes() {
        let scorer = RelevanceScorer::default();
        let with_desc = ComponentRecord::new(Provider::Shadcn, "a", "Widget", Category::Other)
            .unwrap()
            .with_description("animated gradient background");
        let without_desc =
            ComponentRecord::new(Provider::Shadcn, "b", "Widget", Category::Other).unwrap();

        let s1 = scorer.score(&with_desc, "gradient");
        let s2 = scorer.score(&without_desc, "gradient");
        assert!(s1 > s2);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let scorer = RelevanceScorer::default();
        assert_eq!(scorer.score(&button(), ""), 0.0);
        assert_eq!(scorer.score(&button(), "   "), 0.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = RelevanceScorer::default();
        let record = button();
        let first = scorer.score(&record, "animated button");
        for _ in 0..10 {
            assert_eq!(scorer.score(&record, "animated button"), first);
        }
    }

    #[test]
    fn test_score_non_negative() {
        let scorer = RelevanceScorer::default();
        for query in ["", "button", "zzzzzz", "12345", "?!"] {
            assert!(scorer.score(&button(), query) >= 0.0);
        }
    }

    #[test]
    fn test_weights_from_toml() {
        let weights = ScorerWeights::from_toml_str("name_weight = 0.5\ntag_bonus = 10.0").unwrap();
        assert!((weights.name_weight - 0.5).abs() < f32::EPSILON);
        assert!((weights.tag_bonus - 10.0).abs() < f32::EPSILON);
        // Unspecified fields keep defaults
        assert!((weights.exact_name_bonus - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_weights_from_toml_malformed() {
        let result = ScorerWeights::from_toml_str("name_weight = \"not a number\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_weights_change_ranking() {
        // Zero out everything but tags: a tag-only match must outrank
        // a name near-match
        let weights = ScorerWeights {
            exact_name_bonus: 0.0,
            name_weight: 0.0,
            description_weight: 0.0,
            tag_bonus: 20.0,
        };
        let scorer = RelevanceScorer::new(weights);

        let tagged = ComponentRecord::new(Provider::Shadcn, "a", "Unrelated", Category::Other)
            .unwrap()
            .with_tags(vec!["spotlight".into()]);
        let named = ComponentRecord::new(Provider::Shadcn, "b", "Spotlite", Category::Other).unwrap();

        assert!(scorer.score(&tagged, "spotlight") > scorer.score(&named, "spotlight"));
    }

    #[test]
    fn test_scorer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RelevanceScorer>();
    }
}
