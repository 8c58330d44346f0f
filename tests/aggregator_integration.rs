//! End-to-end tests for the aggregation engine against a mock HTTP server.
//!
//! These exercise the full fan-out → fan-in → filter → dedup → score →
//! rank → truncate pipeline over real sockets, including the partial-
//! failure, total-failure, deadline, and rate-limit behaviours.

use std::time::{Duration, Instant};

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dual_search::{render_text, Credentials, DualSearch, Provider, SearchConfig, SearchError};

const BRAVE_KEY: &str = "brave-test-key";
const SERPER_KEY: &str = "serper-test-key";

fn test_config(server: &MockServer) -> SearchConfig {
    SearchConfig {
        brave_endpoint: format!("{}/brave", server.uri()),
        serper_endpoint: format!("{}/serper", server.uri()),
        provider_timeout: Duration::from_secs(2),
        overall_deadline: Duration::from_secs(4),
        rate_limit_backoff: Duration::from_millis(50),
        ..Default::default()
    }
}

fn engine(config: SearchConfig) -> DualSearch {
    let credentials = Credentials::new(BRAVE_KEY, SERPER_KEY).expect("credentials");
    DualSearch::new(credentials, config).expect("engine")
}

fn brave_item(title: &str, url: &str, description: &str, age: Option<&str>) -> Value {
    let mut item = json!({"title": title, "url": url, "description": description});
    if let Some(age) = age {
        item["age"] = json!(age);
    }
    item
}

fn brave_body(results: Vec<Value>) -> Value {
    json!({"web": {"results": results}})
}

fn serper_item(title: &str, link: &str, snippet: &str, date: Option<&str>) -> Value {
    let mut item = json!({"title": title, "link": link, "snippet": snippet});
    if let Some(date) = date {
        item["date"] = json!(date);
    }
    item
}

fn serper_body(organic: Vec<Value>) -> Value {
    json!({"organic": organic})
}

async fn mount_brave(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/brave"))
        .and(header("X-Subscription-Token", BRAVE_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_serper(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/serper"))
        .and(header("X-API-KEY", SERPER_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn merges_hits_from_both_providers() {
    let server = MockServer::start().await;
    mount_brave(
        &server,
        ResponseTemplate::new(200).set_body_json(brave_body(vec![
            brave_item(
                "Rust blog",
                "https://blog.rust-lang.org",
                "rust release notes published for the new cycle",
                Some("2 hours ago"),
            ),
            brave_item(
                "This week in Rust",
                "https://this-week-in-rust.org",
                "weekly rust community newsletter issue summary",
                None,
            ),
        ])),
    )
    .await;
    mount_serper(
        &server,
        ResponseTemplate::new(200).set_body_json(serper_body(vec![serper_item(
            "Rust book",
            "https://doc.rust-lang.org/book",
            "the rust programming language book online edition",
            None,
        )])),
    )
    .await;

    let engine = engine(test_config(&server));
    let result = engine.search("rust release").await.expect("search succeeds");

    assert_eq!(result.hits.len(), 3);
    assert_eq!(result.total_candidates, 3);
    assert_eq!(result.providers_responded, 2);
    assert!(result.hits.iter().any(|h| h.source == Provider::Brave));
    assert!(result.hits.iter().any(|h| h.source == Provider::Serper));
    assert!(result.elapsed_seconds >= 0.0);
}

#[tokio::test]
async fn identical_url_from_both_providers_yields_one_hit() {
    let server = MockServer::start().await;
    let shared = "https://blog.rust-lang.org/announcement";
    mount_brave(
        &server,
        ResponseTemplate::new(200).set_body_json(brave_body(vec![brave_item(
            "Announcement",
            shared,
            "the official rust announcement with all details",
            None,
        )])),
    )
    .await;
    mount_serper(
        &server,
        ResponseTemplate::new(200).set_body_json(serper_body(vec![serper_item(
            "Announcement (via Serper)",
            shared,
            "the official rust announcement with all details",
            None,
        )])),
    )
    .await;

    let engine = engine(test_config(&server));
    let result = engine.search("rust announcement").await.expect("search succeeds");

    assert_eq!(result.hits.len(), 1);
    // First occurrence in merge order wins; Brave launches first.
    assert_eq!(result.hits[0].source, Provider::Brave);
    assert_eq!(result.providers_responded, 2);
}

#[tokio::test]
async fn result_cap_holds_with_many_candidates() {
    let server = MockServer::start().await;
    let brave_items: Vec<Value> = (0..25)
        .map(|i| {
            brave_item(
                &format!("Brave {i}"),
                &format!("https://brave-{i}.example.com"),
                "a sufficiently long snippet with many words",
                None,
            )
        })
        .collect();
    let serper_items: Vec<Value> = (0..22)
        .map(|i| {
            serper_item(
                &format!("Serper {i}"),
                &format!("https://serper-{i}.example.com"),
                "another sufficiently long snippet with many words",
                None,
            )
        })
        .collect();
    mount_brave(&server, ResponseTemplate::new(200).set_body_json(brave_body(brave_items))).await;
    mount_serper(&server, ResponseTemplate::new(200).set_body_json(serper_body(serper_items))).await;

    let config = SearchConfig {
        per_provider_hint: 30,
        ..test_config(&server)
    };
    let engine = engine(config);
    let result = engine.search("anything at all").await.expect("search succeeds");

    assert_eq!(result.total_candidates, 47);
    assert_eq!(result.hits.len(), 10);
}

#[tokio::test]
async fn partial_failure_keeps_surviving_provider() {
    let server = MockServer::start().await;
    let brave_items: Vec<Value> = (0..6)
        .map(|i| {
            brave_item(
                &format!("Brave {i}"),
                &format!("https://brave-{i}.example.com"),
                "a sufficiently long snippet with many words",
                None,
            )
        })
        .collect();
    mount_brave(&server, ResponseTemplate::new(200).set_body_json(brave_body(brave_items))).await;
    mount_serper(&server, ResponseTemplate::new(500)).await;

    let engine = engine(test_config(&server));
    let result = engine.search("resilience test").await.expect("search succeeds");

    assert_eq!(result.hits.len(), 6);
    assert_eq!(result.providers_responded, 1);
    assert!(result.hits.iter().all(|h| h.source == Provider::Brave));
}

#[tokio::test]
async fn total_failure_returns_well_formed_empty_result() {
    let server = MockServer::start().await;
    mount_brave(&server, ResponseTemplate::new(500)).await;
    mount_serper(&server, ResponseTemplate::new(503)).await;

    let engine = engine(test_config(&server));
    let result = engine.search("doomed query").await.expect("still succeeds");

    assert!(result.hits.is_empty());
    assert_eq!(result.total_candidates, 0);
    assert_eq!(result.providers_responded, 0);
    assert_eq!(result.query, "doomed query");
}

#[tokio::test]
async fn empty_provider_payloads_count_as_responses() {
    let server = MockServer::start().await;
    mount_brave(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;
    mount_serper(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let engine = engine(test_config(&server));
    let result = engine.search("no hits anywhere").await.expect("search succeeds");

    assert!(result.hits.is_empty());
    assert_eq!(result.total_candidates, 0);
    assert_eq!(result.providers_responded, 2);
}

#[tokio::test]
async fn empty_query_makes_no_network_call() {
    let server = MockServer::start().await;
    mount_brave(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;
    mount_serper(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let engine = engine(test_config(&server));
    for query in ["", "   ", "\t\n"] {
        let err = engine.search(query).await.unwrap_err();
        assert!(matches!(err, SearchError::EmptyQuery));
        let payload = serde_json::to_value(err.to_payload()).expect("serialize");
        assert_eq!(payload["error"], "Empty search query");
        assert_eq!(payload["results"], json!([]));
    }

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn overall_deadline_bounds_a_stalled_provider() {
    let server = MockServer::start().await;
    // Brave never answers within any useful window.
    mount_brave(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(brave_body(vec![]))
            .set_delay(Duration::from_secs(30)),
    )
    .await;
    mount_serper(
        &server,
        ResponseTemplate::new(200).set_body_json(serper_body(vec![serper_item(
            "Fast answer",
            "https://fast.example.com",
            "the quick provider answered well in time",
            None,
        )])),
    )
    .await;

    let config = SearchConfig {
        provider_timeout: Duration::from_secs(20),
        overall_deadline: Duration::from_millis(300),
        ..test_config(&server)
    };
    let engine = engine(config);

    let started = Instant::now();
    let result = engine.search("deadline test").await.expect("search succeeds");
    let elapsed = started.elapsed();

    assert!(
        elapsed < Duration::from_secs(2),
        "deadline not enforced: took {elapsed:?}"
    );
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.providers_responded, 1);
    assert_eq!(result.hits[0].source, Provider::Serper);
}

#[tokio::test]
async fn per_provider_timeout_is_an_independent_safety_net() {
    let server = MockServer::start().await;
    mount_brave(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(brave_body(vec![]))
            .set_delay(Duration::from_secs(30)),
    )
    .await;
    mount_serper(
        &server,
        ResponseTemplate::new(200).set_body_json(serper_body(vec![serper_item(
            "Survivor",
            "https://survivor.example.com",
            "the responsive provider still contributed results here",
            None,
        )])),
    )
    .await;

    let config = SearchConfig {
        provider_timeout: Duration::from_millis(300),
        overall_deadline: Duration::from_secs(20),
        ..test_config(&server)
    };
    let engine = engine(config);

    let started = Instant::now();
    let result = engine.search("timeout test").await.expect("search succeeds");

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.providers_responded, 1);
}

#[tokio::test]
async fn rate_limited_provider_is_absorbed_after_one_backoff() {
    let server = MockServer::start().await;
    mount_brave(&server, ResponseTemplate::new(429)).await;
    mount_serper(
        &server,
        ResponseTemplate::new(200).set_body_json(serper_body(vec![serper_item(
            "Still here",
            "https://still-here.example.com",
            "the other provider was not rate limited",
            None,
        )])),
    )
    .await;

    let engine = engine(test_config(&server));
    let result = engine.search("rate limit test").await.expect("search succeeds");

    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.providers_responded, 1);
    // Exactly one request to the rate-limited provider: backoff, no retry.
    let brave_requests = server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == "/brave")
        .count();
    assert_eq!(brave_requests, 1);
}

#[tokio::test]
async fn thin_snippets_never_reach_the_result() {
    let server = MockServer::start().await;
    mount_brave(
        &server,
        ResponseTemplate::new(200).set_body_json(brave_body(vec![
            brave_item("Thin", "https://thin.example.com", "too short entirely", None),
            brave_item(
                "Substantive",
                "https://substantive.example.com",
                "this snippet has enough words to survive filtering",
                None,
            ),
        ])),
    )
    .await;
    mount_serper(&server, ResponseTemplate::new(200).set_body_json(serper_body(vec![]))).await;

    let engine = engine(test_config(&server));
    let result = engine.search("filter test").await.expect("search succeeds");

    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.hits[0].url, "https://substantive.example.com");
}

#[tokio::test]
async fn fresh_hit_ranks_above_equally_relevant_stale_hit() {
    let server = MockServer::start().await;
    mount_brave(
        &server,
        ResponseTemplate::new(200).set_body_json(brave_body(vec![
            brave_item(
                "Stale coverage",
                "https://stale.example.com",
                "market report coverage with identical keyword overlap",
                Some("3 days ago"),
            ),
            brave_item(
                "Fresh coverage",
                "https://fresh.example.com",
                "market report coverage with identical keyword overlap",
                Some("2 hours ago"),
            ),
        ])),
    )
    .await;
    mount_serper(&server, ResponseTemplate::new(200).set_body_json(serper_body(vec![]))).await;

    let engine = engine(test_config(&server));
    let result = engine.search("market report").await.expect("search succeeds");

    assert_eq!(result.hits.len(), 2);
    assert_eq!(result.hits[0].url, "https://fresh.example.com");
    assert!(result.hits[0].relevance_score > result.hits[1].relevance_score);
}

#[tokio::test]
async fn record_and_text_renderings_reflect_the_result() {
    let server = MockServer::start().await;
    mount_brave(
        &server,
        ResponseTemplate::new(200).set_body_json(brave_body(vec![brave_item(
            "Rust 1.80",
            "https://blog.rust-lang.org/1.80",
            "the rust team announced the release today",
            Some("1 hour ago"),
        )])),
    )
    .await;
    mount_serper(&server, ResponseTemplate::new(200).set_body_json(serper_body(vec![]))).await;

    let engine = engine(test_config(&server));
    let result = engine.search("rust release").await.expect("search succeeds");

    let record = serde_json::to_value(result.to_record()).expect("serialize record");
    assert_eq!(record["query"], "rust release");
    assert_eq!(record["total_results"], 1);
    assert_eq!(record["sources"], json!(["Brave Search"]));
    assert_eq!(record["metadata"]["providers_responded"], 2);
    assert_eq!(record["metadata"]["total_matches"], 1);

    let text = render_text(&result);
    assert!(text.starts_with("Search Results for: rust release"));
    assert!(text.contains("1. [Brave] Rust 1.80"));
    assert!(text.contains("   Time: 1 hour ago"));
}
