//! Brave Search API client — independent index, freshness-oriented.
//!
//! Sends one GET to the web-search endpoint with the subscription token
//! header, a result-count hint, and an optional freshness window, and
//! adapts the `{"web": {"results": [...]}}` payload into [`SearchHit`]s.

use crate::backoff::BackoffPolicy;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::provider::ProviderClient;
use crate::types::{Provider, SearchHit};
use serde::Deserialize;

/// Brave Search API client.
pub struct BraveClient {
    api_key: String,
    http: reqwest::Client,
    backoff: BackoffPolicy,
}

impl BraveClient {
    pub fn new(api_key: String, http: reqwest::Client, backoff: BackoffPolicy) -> Self {
        Self {
            api_key,
            http,
            backoff,
        }
    }
}

impl ProviderClient for BraveClient {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchHit>, SearchError> {
        tracing::trace!(query, "Brave search");

        let count = config.per_provider_hint.to_string();
        let mut request = self
            .http
            .get(&config.brave_endpoint)
            .header("X-Subscription-Token", &self.api_key)
            .header("Accept", "application/json")
            .query(&[("q", query), ("count", count.as_str())]);
        if let Some(freshness) = &config.freshness {
            request = request.query(&[("freshness", freshness.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Brave request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Brave rate limited, backing off");
            self.backoff.wait().await;
            return Err(SearchError::RateLimited("Brave returned 429".into()));
        }

        let response = response
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Brave HTTP error: {e}")))?;

        let body: BraveResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("Brave response body: {e}")))?;

        let hits = adapt_response(body, config.per_provider_hint);
        tracing::trace!(count = hits.len(), "Brave hits adapted");
        Ok(hits)
    }

    fn provider(&self) -> Provider {
        Provider::Brave
    }
}

/// Map a raw Brave payload into normalized hits, keeping at most `limit`.
///
/// Extracted as a separate function for testability with mock payloads.
pub(crate) fn adapt_response(body: BraveResponse, limit: usize) -> Vec<SearchHit> {
    body.web
        .results
        .into_iter()
        .take(limit)
        .filter_map(|item| {
            SearchHit::normalized(
                &item.title,
                &item.url,
                &item.description,
                Provider::Brave,
                item.age.as_deref(),
            )
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct BraveResponse {
    #[serde(default)]
    web: BraveWeb,
}

#[derive(Debug, Default, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveItem>,
}

#[derive(Debug, Deserialize)]
struct BraveItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: String,
    age: Option<String>,
}
