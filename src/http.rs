//! Shared HTTP client construction for provider API requests.

use crate::error::SearchError;
use std::time::Duration;

/// User-Agent sent with every provider request.
const USER_AGENT: &str = concat!("dual-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for provider API calls.
///
/// The client carries the per-provider request timeout and a crate
/// User-Agent. One client is built per engine construction and shared
/// across calls; no connection state is mutated by a search.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
