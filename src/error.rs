//! Error types for the dual-search crate.
//!
//! Error messages use stable strings suitable for display and
//! programmatic handling. API keys never appear in error messages.

use serde::Serialize;

/// Errors that can occur during search aggregation.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid configuration or missing credential. Fatal at construction.
    #[error("config error: {0}")]
    Config(String),

    /// The query was empty or whitespace-only. Terminal, non-retryable;
    /// boundary layers report it as a structured empty result.
    #[error("Empty search query")]
    EmptyQuery,

    /// An HTTP request to a provider failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A provider returned an explicit rate-limit status.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// A provider timed out or was abandoned at the overall deadline.
    #[error("timed out: {0}")]
    Timeout(String),

    /// Failed to parse a provider response body.
    #[error("parse error: {0}")]
    Parse(String),
}

impl SearchError {
    /// Structured payload for boundary consumers: `{"error": ..., "results": []}`.
    ///
    /// Callers serialize this instead of propagating the error past the
    /// engine boundary, so invalid input surfaces as a valid empty result.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.to_string(),
            results: Vec::new(),
        }
    }
}

/// Serializable error payload returned at the engine boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    pub results: Vec<crate::types::SearchHit>,
}

/// Convenience type alias for dual-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
