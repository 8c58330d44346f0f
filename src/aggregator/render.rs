//! Plain-text rendering of a search result for prose consumers.

use crate::types::{Provider, SearchResult};
use std::fmt::Write;

/// Render a result as a numbered, human-readable summary.
///
/// ```text
/// Search Results for: <query>
///
/// Total Results: <n>
/// Sources: Brave Search, Serper
///
/// 1. [Brave] <title>
///    URL: <url>
///    Time: <published_at>
///    <snippet>
/// ```
///
/// The `Time:` line is omitted for hits without a recency token.
pub fn render_text(result: &SearchResult) -> String {
    let sources = Provider::all()
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    let _ = writeln!(out, "Search Results for: {}", result.query);
    out.push('\n');
    let _ = writeln!(out, "Total Results: {}", result.hits.len());
    let _ = writeln!(out, "Sources: {sources}");
    out.push('\n');

    for (idx, hit) in result.hits.iter().enumerate() {
        let _ = writeln!(out, "{}. [{}] {}", idx + 1, hit.source, hit.title);
        let _ = writeln!(out, "   URL: {}", hit.url);
        if let Some(time) = &hit.published_at {
            let _ = writeln!(out, "   Time: {time}");
        }
        let _ = writeln!(out, "   {}", hit.snippet);
        out.push('\n');
    }

    out
}
