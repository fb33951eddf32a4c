//! Self-contained string similarity
//!
//! Normalized edit-distance ratios on a fixed 0-100 scale, tolerant of
//! typos and partial matches. Implemented directly rather than pulling
//! in a fuzzy-matching dependency; determinism matters more here than
//! squeezing out the last few percent of match quality.

/// Character-level Levenshtein edit distance
///
/// Two-row dynamic programming, O(len(a) * len(b)) time and
/// O(min-row) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Normalized similarity ratio on a 0-100 scale
///
/// `((len(a) + len(b)) - distance) / (len(a) + len(b)) * 100`.
/// Two empty strings are identical (100); an empty string against a
/// non-empty one scores 0.
pub fn ratio(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

fn ratio_chars(a: &[char], b: &[char]) -> f32 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let distance = levenshtein_chars(a, b);
    ((total - distance) as f32 / total as f32) * 100.0
}

/// Best contiguous-substring similarity on a 0-100 scale
///
/// Slides the shorter string across every same-length char window of
/// the longer and returns the best `ratio`. Captures "query appears
/// somewhere inside the description" matches that the plain ratio
/// would dilute. Returns 0 if either side is empty.
pub fn partial_ratio(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = 0.0f32;
    for start in 0..=(long.len() - short.len()) {
        let window = &long[start..start + short.len()];
        let score = ratio_chars(short, window);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
