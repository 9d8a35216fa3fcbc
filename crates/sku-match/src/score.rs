//! String-similarity scorers for the fuzzy stage.
//!
//! All scorers return scores on the 0-100 scale the cutoff is expressed
//! in. The plain ratio is the Indel normalized similarity; partial and
//! token-set ratios are composed from it following the classic
//! definitions, since the rapidfuzz port only ships the distance
//! metrics.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;
use sku_model::FuzzyScorer;

/// Scores a pair of strings with the given scorer.
#[must_use]
pub fn score(scorer: FuzzyScorer, a: &str, b: &str) -> f64 {
    match scorer {
        FuzzyScorer::PartialRatio => partial_ratio(a, b),
        FuzzyScorer::TokenSetRatio => token_set_ratio(a, b),
        FuzzyScorer::Ratio => ratio(a, b),
    }
}

/// Indel-based similarity over the whole strings.
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

/// Best [`ratio`] of the shorter string against every window of its
/// length in the longer string. A string fully contained in the other
/// scores 100.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };
    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let mut best = 0.0f64;
    for window in longer.windows(shorter.len()) {
        let similarity =
            indel::normalized_similarity(window.iter().copied(), shorter.iter().copied()) * 100.0;
        if similarity > best {
            best = similarity;
        }
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Token-set comparison over sorted unique whitespace tokens.
///
/// When one side's tokens are a subset of the other's (non-empty
/// intersection), the score is 100 regardless of the extra tokens.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 100.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersection.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let sect = intersection.join(" ");
    let combined_a = join_tokens(&sect, &only_a.join(" "));
    let combined_b = join_tokens(&sect, &only_b.join(" "));

    ratio(&combined_a, &combined_b)
        .max(ratio(&sect, &combined_a))
        .max(ratio(&sect, &combined_b))
}

fn join_tokens(sect: &str, rest: &str) -> String {
    match (sect.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (_, true) => sect.to_string(),
        _ => format!("{sect} {rest}"),
    }
}
