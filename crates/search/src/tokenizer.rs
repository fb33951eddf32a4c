//! Word tokenizer shared by indexing and query processing
//!
//! Index fields and query text must tokenize identically, otherwise
//! candidate gathering misses records the scorer would rank.

/// Tokenize text into searchable terms
///
/// - Lowercase
/// - Split on non-alphanumeric characters
/// - Discard empty tokens
///
/// # Example
///
/// ```
/// use uicatalog_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Rainbow Button!");
/// assert_eq!(tokens, vec!["rainbow", "button"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenize and deduplicate for query processing
///
/// Preserves first-occurrence order.
///
/// # Example
///
/// ```
/// use uicatalog_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("button Button BUTTON");
/// assert_eq!(tokens, vec!["button"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
