//! First-seen-wins deduplication by normalized URL.
//!
//! Merge order is deterministic (provider launch order), so the first
//! occurrence of a URL is the one that survives. URLs are canonicalised
//! before comparison so that trivially different spellings of the same
//! page (fragment, default port, trailing slash, tracking parameters,
//! host case) collapse to one key.

use crate::types::SearchHit;
use std::collections::HashSet;
use url::Url;

/// Tracking query parameters ignored when comparing URLs.
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "ref",
];

/// Drop every hit whose URL was already seen, keeping merge order.
pub fn deduplicate_by_url(hits: Vec<SearchHit>) -> Vec<SearchHit> {
    let mut seen: HashSet<String> = HashSet::new();
    hits.into_iter()
        .filter(|hit| seen.insert(dedup_key(&hit.url)))
        .collect()
}

/// Canonical comparison key for a URL.
///
/// Unparseable input is compared verbatim.
pub(crate) fn dedup_key(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    url.set_fragment(None);

    if matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        let _ = url.set_port(None);
    }

    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.to_ascii_lowercase().as_str()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.sort();
    if params.is_empty() {
        url.set_query(None);
    } else {
        let query = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }

    let path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(path.trim_end_matches('/'));
    }

    url.to_string()
}
