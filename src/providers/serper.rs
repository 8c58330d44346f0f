//! Serper API client — general-purpose Google results proxy.
//!
//! Sends one POST with the API-key header and a JSON body carrying the
//! query plus region/language hints, and adapts the `{"organic": [...]}`
//! payload into [`SearchHit`]s.

use crate::backoff::BackoffPolicy;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::provider::ProviderClient;
use crate::types::{Provider, SearchHit};
use serde::{Deserialize, Serialize};

/// Serper API client.
pub struct SerperClient {
    api_key: String,
    http: reqwest::Client,
    backoff: BackoffPolicy,
}

impl SerperClient {
    pub fn new(api_key: String, http: reqwest::Client, backoff: BackoffPolicy) -> Self {
        Self {
            api_key,
            http,
            backoff,
        }
    }
}

impl ProviderClient for SerperClient {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchHit>, SearchError> {
        tracing::trace!(query, "Serper search");

        let body = SerperRequest {
            q: query,
            gl: &config.region,
            hl: &config.language,
            autocorrect: true,
            kind: "search",
        };

        let response = self
            .http
            .post(&config.serper_endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Serper request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Serper rate limited, backing off");
            self.backoff.wait().await;
            return Err(SearchError::RateLimited("Serper returned 429".into()));
        }

        let response = response
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Serper HTTP error: {e}")))?;

        let body: SerperResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("Serper response body: {e}")))?;

        let hits = adapt_response(body, config.per_provider_hint);
        tracing::trace!(count = hits.len(), "Serper hits adapted");
        Ok(hits)
    }

    fn provider(&self) -> Provider {
        Provider::Serper
    }
}

/// Map a raw Serper payload into normalized hits, keeping at most `limit`.
pub(crate) fn adapt_response(body: SerperResponse, limit: usize) -> Vec<SearchHit> {
    body.organic
        .into_iter()
        .take(limit)
        .filter_map(|item| {
            SearchHit::normalized(
                &item.title,
                &item.link,
                &item.snippet,
                Provider::Serper,
                item.date.as_deref(),
            )
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    gl: &'a str,
    hl: &'a str,
    autocorrect: bool,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperItem>,
}

#[derive(Debug, Deserialize)]
struct SerperItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
    date: Option<String>,
}
