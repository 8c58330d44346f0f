//! Keyword-overlap scoring with a recency boost, and the rank ordering.
//!
//! Formula:
//!
//! ```text
//! base  = keyword_matches * 10 + snippet_word_count / 50
//! score = base * 1.5   when published_at contains a sub-day marker
//! ```
//!
//! `keyword_matches` is the size of the intersection between the
//! lowercase word sets of the query and the snippet. Keyword overlap
//! dominates raw length, and freshness multiplies an already
//! keyword-weighted base rather than adding an unbounded term.

use crate::types::SearchHit;
use std::cmp::Ordering;
use std::collections::HashSet;

const KEYWORD_WEIGHT: f64 = 10.0;
const LENGTH_DIVISOR: f64 = 50.0;
const RECENCY_BOOST: f64 = 1.5;

/// Markers indicating a sub-day-old result in a provider recency token.
const FRESHNESS_MARKERS: &[&str] = &["minute", "hour"];

/// Compute the relevance score for one hit against a query.
pub fn relevance_score(query: &str, hit: &SearchHit) -> f64 {
    let query_words = word_set(query);
    let snippet_words = word_set(&hit.snippet);
    let matches = query_words.intersection(&snippet_words).count();
    let word_count = hit.snippet.split_whitespace().count();

    let base = matches as f64 * KEYWORD_WEIGHT + word_count as f64 / LENGTH_DIVISOR;
    if hit.published_at.as_deref().is_some_and(is_fresh) {
        base * RECENCY_BOOST
    } else {
        base
    }
}

/// Score every hit in place against `query`.
pub fn score_hits(mut hits: Vec<SearchHit>, query: &str) -> Vec<SearchHit> {
    for hit in &mut hits {
        hit.relevance_score = relevance_score(query, hit);
    }
    hits
}

/// Sort hits into final rank order.
///
/// Descending by `(relevance_score, has timestamp, timestamp token)`.
/// The timestamp tie-break is a raw string comparison of the
/// provider-native token, preserving the original tool's ordering; the
/// sort is stable, so equal keys keep merge order.
pub fn rank(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.published_at.is_some().cmp(&a.published_at.is_some()))
            .then_with(|| b.published_at.cmp(&a.published_at))
    });
}

/// Lowercase word set of a text.
fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect()
}

/// Does a recency token indicate a sub-day-old result?
fn is_fresh(token: &str) -> bool {
    let token = token.to_lowercase();
    FRESHNESS_MARKERS.iter().any(|m| token.contains(m))
}
