//! Core types: providers, normalized hits, and the aggregated result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search backends that dual-search can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Brave Search API — independent index, freshness-oriented.
    Brave,
    /// Serper API — general-purpose Google results proxy.
    Serper,
}

impl Provider {
    /// Short name used in hit provenance and log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brave => "Brave",
            Self::Serper => "Serper",
        }
    }

    /// Human-readable label used in the rendered "Sources" line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Brave => "Brave Search",
            Self::Serper => "Serper",
        }
    }

    /// All supported providers, in fan-out (merge) order.
    pub fn all() -> &'static [Provider] {
        &[Self::Brave, Self::Serper]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One normalized search result from one provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result page title, trimmed.
    pub title: String,
    /// Result URL. Identity key for deduplication.
    pub url: String,
    /// Text snippet, trimmed with inner whitespace collapsed.
    pub snippet: String,
    /// Which provider returned this hit.
    pub source: Provider,
    /// Provider-native recency token ("2 hours ago", "2024-05-01", ...).
    /// Treated as opaque except for sub-day marker substring tests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    /// Computed relevance score, always >= 0. See the scoring module.
    pub relevance_score: f64,
}

impl SearchHit {
    /// Build a hit from raw provider fields, normalizing whitespace.
    ///
    /// Returns `None` when the title, URL, or snippet is empty after
    /// trimming — such entries carry no usable data and never enter
    /// the aggregation pipeline.
    pub fn normalized(
        title: &str,
        url: &str,
        snippet: &str,
        source: Provider,
        published_at: Option<&str>,
    ) -> Option<Self> {
        let title = title.trim();
        let url = url.trim();
        let snippet = collapse_whitespace(snippet);
        if title.is_empty() || url.is_empty() || snippet.is_empty() {
            return None;
        }
        let published_at = published_at
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Some(Self {
            title: title.to_string(),
            url: url.to_string(),
            snippet,
            source,
            published_at,
            relevance_score: 0.0,
        })
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The aggregated, ranked outcome of one search call.
///
/// Created fresh per call and immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Trimmed echo of the input query.
    pub query: String,
    /// Ranked hits, at most `SearchConfig::max_results`.
    pub hits: Vec<SearchHit>,
    /// Candidate count after filtering and dedup, before truncation.
    pub total_candidates: usize,
    /// Providers that returned without error before the deadline.
    pub providers_responded: usize,
    /// Wall-clock duration of the call in seconds.
    pub elapsed_seconds: f64,
}

impl SearchResult {
    /// Convert to the JSON wire shape consumed by boundary layers.
    pub fn to_record(&self) -> SearchRecord {
        let mut sources: Vec<&'static str> = Vec::new();
        for hit in &self.hits {
            let label = hit.source.label();
            if !sources.contains(&label) {
                sources.push(label);
            }
        }
        SearchRecord {
            query: self.query.clone(),
            total_results: self.hits.len(),
            sources,
            results: self.hits.clone(),
            metadata: RecordMetadata {
                execution_time: self.elapsed_seconds,
                providers_responded: self.providers_responded,
                total_matches: self.total_candidates,
            },
        }
    }
}

/// JSON-serializable record shape for structured consumers.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRecord {
    pub query: String,
    pub total_results: usize,
    pub sources: Vec<&'static str>,
    pub results: Vec<SearchHit>,
    pub metadata: RecordMetadata,
}

/// Execution metadata attached to a [`SearchRecord`].
#[derive(Debug, Clone, Serialize)]
pub struct RecordMetadata {
    pub execution_time: f64,
    pub providers_responded: usize,
    pub total_matches: usize,
}
