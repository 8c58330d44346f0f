//! The aggregation engine: concurrent provider fan-out, fan-in under a
//! deadline, then filter, dedup, score, rank, truncate.
//!
//! A provider that errors, times out, or is abandoned at the deadline
//! contributes zero candidates and never fails the overall call. The
//! only error [`DualSearch::search`] itself raises is
//! [`SearchError::EmptyQuery`]; everything below the fan-in barrier
//! degrades to "fewer or no results".

pub mod dedup;
pub mod render;
pub mod scoring;

use crate::backoff::BackoffPolicy;
use crate::config::SearchConfig;
use crate::credentials::Credentials;
use crate::error::{Result, SearchError};
use crate::http;
use crate::provider::ProviderClient;
use crate::providers::{BraveClient, SerperClient};
use crate::types::{Provider, SearchHit, SearchResult};

use std::time::Instant;

/// Minimum whitespace-separated snippet tokens for a substantive hit.
const MIN_SNIPPET_WORDS: usize = 5;

/// Multi-provider search aggregation engine.
///
/// Holds one client per provider, built once at construction. Each
/// `search` call is independent: no cache, no connection state mutated,
/// results are fresh immutable values.
pub struct DualSearch {
    config: SearchConfig,
    brave: BraveClient,
    serper: SerperClient,
}

impl DualSearch {
    /// Build the engine from credentials and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration.
    /// Missing credentials fail earlier, in [`Credentials::new`].
    pub fn new(credentials: Credentials, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let backoff = BackoffPolicy::fixed(config.rate_limit_backoff);
        let client = http::build_client(config.provider_timeout)?;
        Ok(Self {
            brave: BraveClient::new(credentials.brave_api_key, client.clone(), backoff),
            serper: SerperClient::new(credentials.serper_api_key, client, backoff),
            config,
        })
    }

    /// Build the engine with [`SearchConfig::default`].
    pub fn with_defaults(credentials: Credentials) -> Result<Self> {
        Self::new(credentials, SearchConfig::default())
    }

    /// Run one aggregated search.
    ///
    /// Fans out to every provider concurrently, joins at a barrier
    /// bounded by `overall_deadline`, and reduces whatever arrived into
    /// one ranked, deduplicated, truncated [`SearchResult`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] for an empty or
    /// whitespace-only query, before any network call. Provider
    /// failures never surface here: when all providers fail the call
    /// still succeeds with an empty result set.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        tracing::debug!(query, "starting aggregated search");
        let started = Instant::now();
        let deadline = tokio::time::Instant::now() + self.config.overall_deadline;

        // Fan out. Each task owns its outcome and is bounded by its own
        // provider timeout nested inside the overall deadline; a task
        // still pending at the deadline is dropped, which cancels it
        // before it can contribute anything.
        let tasks: Vec<_> = Provider::all()
            .iter()
            .map(|&provider| async move {
                let bounded = tokio::time::timeout_at(
                    deadline,
                    tokio::time::timeout(
                        self.config.provider_timeout,
                        self.query_provider(provider, query),
                    ),
                )
                .await;
                let outcome = match bounded {
                    Ok(Ok(result)) => result,
                    Ok(Err(_)) => Err(SearchError::Timeout(format!(
                        "{provider} exceeded provider timeout"
                    ))),
                    Err(_) => Err(SearchError::Timeout(format!(
                        "{provider} abandoned at overall deadline"
                    ))),
                };
                (provider, outcome)
            })
            .collect();

        let outcomes = futures::future::join_all(tasks).await;

        // Fan in. Merge order is provider launch order, so the final
        // ordering is deterministic for identical provider responses.
        let mut merged: Vec<SearchHit> = Vec::new();
        let mut providers_responded = 0;
        for (provider, outcome) in outcomes {
            match outcome {
                Ok(hits) => {
                    tracing::debug!(%provider, count = hits.len(), "provider returned hits");
                    providers_responded += 1;
                    merged.extend(hits);
                }
                Err(err) => {
                    tracing::warn!(%provider, error = %err, "provider query failed");
                }
            }
        }

        merged.retain(is_substantive);
        let deduped = dedup::deduplicate_by_url(merged);
        let mut hits = scoring::score_hits(deduped, query);
        scoring::rank(&mut hits);

        let total_candidates = hits.len();
        hits.truncate(self.config.max_results);

        let result = SearchResult {
            query: query.to_string(),
            hits,
            total_candidates,
            providers_responded,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        };
        tracing::debug!(
            hits = result.hits.len(),
            total_candidates,
            providers_responded,
            elapsed = result.elapsed_seconds,
            "search finished"
        );
        Ok(result)
    }

    async fn query_provider(&self, provider: Provider, query: &str) -> Result<Vec<SearchHit>> {
        match provider {
            Provider::Brave => self.brave.search(query, &self.config).await,
            Provider::Serper => self.serper.search(query, &self.config).await,
        }
    }
}

/// A hit is substantive when its snippet has at least five words.
fn is_substantive(hit: &SearchHit) -> bool {
    hit.snippet.split_whitespace().count() >= MIN_SNIPPET_WORDS
}
