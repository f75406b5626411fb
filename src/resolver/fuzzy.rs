//! Candidate ranking for alias and model disambiguation.
//!
//! Not used for identifier-level scoring — only to pick between
//! candidates once a stage has evidence to disambiguate.

use super::normalize::{normalize_key, tokens};

/// Similarity between an input and a candidate name.
///
/// 1.0 for case-insensitive equality, 0.8 for substring containment in
/// either direction, otherwise the fraction of input tokens with any
/// token-level substring overlap against the candidate's tokens.
pub fn similarity(input: &str, candidate: &str) -> f64 {
    let a = normalize_key(input);
    let b = normalize_key(candidate);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.8;
    }
    let input_tokens = tokens(&a);
    let candidate_tokens = tokens(&b);
    if input_tokens.is_empty() {
        return 0.0;
    }
    // Single-character tokens ("r" from "GT-R") overlap with almost
    // anything; they count toward the denominator but never match.
    let overlapping = input_tokens
        .iter()
        .filter(|t| {
            t.len() >= 2
                && candidate_tokens
                    .iter()
                    .any(|c| c.len() >= 2 && (c.contains(t.as_str()) || t.contains(c.as_str())))
        })
        .count();
    overlapping as f64 / input_tokens.len() as f64
}

/// Index and score of the best-scoring candidate.
///
/// Ties break to the first-declared candidate — a stable, arbitrary
/// order, not a semantic one.
pub fn best_match<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in candidates.into_iter().enumerate() {
        let score = similarity(input, candidate);
        if score <= 0.0 {
            continue;
        }
        match best {
            None => best = Some((i, score)),
            Some((_, s)) if score > s => best = Some((i, score)),
            _ => {}
        }
    }
    best
}
