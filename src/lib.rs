//! # dual-search
//!
//! Multi-provider web search aggregation: given a free-text query, fan
//! out concurrently to independent search backends (Brave Search API
//! and the Serper API), tolerate partial provider failure, normalize
//! heterogeneous response shapes into one schema, deduplicate, score by
//! keyword overlap and recency, and return a bounded, stably ordered
//! result set.
//!
//! ## Design
//!
//! - One [`ProviderClient`] per backend maps that backend's JSON shape
//!   into the common [`SearchHit`] schema and absorbs its failure modes
//! - The [`DualSearch`] engine fans out under one overall deadline;
//!   wall-clock latency is bounded by the slowest *surviving* provider,
//!   never the sum of all providers
//! - A provider that errors, rate-limits, or misses the deadline simply
//!   contributes zero candidates; the call succeeds whenever at least
//!   one provider returns usable data, and still returns a well-formed
//!   empty result when all of them fail
//! - No caching, no persistence, no shared state across calls
//!
//! ## Security
//!
//! - API keys are required at construction, never logged, and redacted
//!   from `Debug` output
//! - Search queries are logged at trace/debug level only
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> dual_search::Result<()> {
//! use dual_search::{Credentials, DualSearch};
//!
//! let credentials = Credentials::new("brave-key", "serper-key")?;
//! let engine = DualSearch::with_defaults(credentials)?;
//! let result = engine.search("rust 1.80 release").await?;
//! for hit in &result.hits {
//!     println!("[{}] {} — {}", hit.source, hit.title, hit.url);
//! }
//! println!("{}", dual_search::render_text(&result));
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod backoff;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod provider;
pub mod providers;
pub mod types;

pub use aggregator::render::render_text;
pub use aggregator::DualSearch;
pub use backoff::BackoffPolicy;
pub use config::SearchConfig;
pub use credentials::Credentials;
pub use error::{ErrorPayload, Result, SearchError};
pub use provider::ProviderClient;
pub use types::{Provider, SearchHit, SearchRecord, SearchResult};
