//! Trait definition for pluggable search provider backends.
//!
//! Each provider (Brave, Serper) implements [`ProviderClient`] to give
//! the aggregator a uniform interface: one query in, a list of
//! normalized hits or a mapped failure out. Raw transport errors never
//! cross this boundary — every failure mode is mapped to a
//! [`SearchError`](crate::error::SearchError) variant that the
//! aggregator absorbs.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{Provider, SearchHit};

/// A pluggable search provider backend.
///
/// Implementors translate one query into one backend-specific HTTP
/// request and parse the JSON response through a provider-specific
/// adapter into the common [`SearchHit`] shape. Each client handles its
/// own request construction, credential header, rate-limit backoff, and
/// error mapping.
///
/// All implementations must be `Send + Sync` for concurrent fan-out.
pub trait ProviderClient: Send + Sync {
    /// Perform one search request and return normalized hits.
    ///
    /// # Errors
    ///
    /// Returns a mapped [`SearchError`] on transport failure, rate
    /// limiting, or a malformed body. The aggregator treats any error
    /// as "zero candidates from this provider".
    fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchHit>, SearchError>> + Send;

    /// Which [`Provider`] this client reaches.
    fn provider(&self) -> Provider;
}
