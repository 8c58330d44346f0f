//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls result caps, per-provider timeouts, the
//! overall fan-in deadline, rate-limit backoff, and the provider hint
//! parameters (freshness window, locale). Defaults match the behaviour
//! of the production tool this engine replaces.

use crate::error::SearchError;
use std::time::Duration;

/// Brave Search API endpoint.
pub const BRAVE_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";
/// Serper API endpoint.
pub const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";

/// Configuration for a search aggregation engine.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum hits returned after dedup and ranking.
    pub max_results: usize,
    /// How many raw results to request from (and accept per) provider.
    pub per_provider_hint: usize,
    /// Per-provider HTTP timeout, independent of the overall deadline.
    pub provider_timeout: Duration,
    /// Overall wall-clock bound on one `search()` call. Providers still
    /// outstanding at the deadline are abandoned.
    pub overall_deadline: Duration,
    /// Fixed wait applied once when a provider returns HTTP 429.
    pub rate_limit_backoff: Duration,
    /// Freshness window hint sent to Brave (`"1d"` = past day).
    /// `None` omits the parameter.
    pub freshness: Option<String>,
    /// Region hint sent to Serper (`gl` parameter).
    pub region: String,
    /// Language hint sent to Serper (`hl` parameter).
    pub language: String,
    /// Brave endpoint URL. Overridable for tests against a mock server.
    pub brave_endpoint: String,
    /// Serper endpoint URL. Overridable for tests against a mock server.
    pub serper_endpoint: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            per_provider_hint: 5,
            provider_timeout: Duration::from_secs(5),
            overall_deadline: Duration::from_secs(10),
            rate_limit_backoff: Duration::from_secs(2),
            freshness: Some("1d".into()),
            region: "us".into(),
            language: "en".into(),
            brave_endpoint: BRAVE_ENDPOINT.into(),
            serper_endpoint: SERPER_ENDPOINT.into(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` and `per_provider_hint` must be greater than 0
    /// - `provider_timeout` and `overall_deadline` must be non-zero
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.per_provider_hint == 0 {
            return Err(SearchError::Config(
                "per_provider_hint must be greater than 0".into(),
            ));
        }
        if self.provider_timeout.is_zero() {
            return Err(SearchError::Config(
                "provider_timeout must be non-zero".into(),
            ));
        }
        if self.overall_deadline.is_zero() {
            return Err(SearchError::Config(
                "overall_deadline must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
