// tests/http_fetcher.rs
// Exercises the gated, cached HTTP page source against a local mock server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skills_catalog::fetch::ManualClock;
use skills_catalog::{Catalog, HttpFetcher, PageSource, Settings};

const LISTING: &str = r#"<main>
  <a href="/acme/kit/first-skill"><div>1</div><div><h3>first-skill</h3></div><div>12.5K</div></a>
  <a href="/acme/kit/second-skill"><div>2</div><div><h3>second-skill</h3></div><div>900</div></a>
</main>"#;

fn remote_settings(server: &MockServer) -> Settings {
    Settings {
        allow_remote: true,
        ..Settings::default()
    }
    .with_base_url(&server.uri())
    .unwrap()
}

#[tokio::test]
async fn test_gate_closed_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .expect(0)
        .mount(&server)
        .await;

    let settings = Settings::default().with_base_url(&server.uri()).unwrap();
    let catalog = Catalog::from_settings(&settings).unwrap();

    assert!(catalog.all_items().await.is_empty());
    assert!(catalog.trending_items().await.is_empty());
    let metrics = catalog.metrics_summary().await;
    assert_eq!(metrics.total_count, "0");
    assert_eq!(metrics.hottest_top_popularity, "0%");
}

#[tokio::test]
async fn test_listing_fetched_and_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .mount(&server)
        .await;

    let settings = remote_settings(&server);
    let catalog = Catalog::from_settings(&settings).unwrap();
    let items = catalog.trending_items().await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "first-skill");
    assert_eq!(items[0].popularity, "12.5K");
    assert_eq!(
        items[0].canonical_url,
        format!("{}/acme/kit/first-skill", server.uri())
    );
}

#[tokio::test]
async fn test_error_status_becomes_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/acme/kit/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let settings = remote_settings(&server);
    let fetcher = HttpFetcher::new(&settings).unwrap();

    assert_eq!(fetcher.fetch(&format!("{}/hot", server.uri())).await, None);
    assert_eq!(
        fetcher.fetch(&format!("{}/acme/kit/missing", server.uri())).await,
        None
    );
    // Failures are not cached
    assert!(fetcher.cache().is_empty());
}

#[tokio::test]
async fn test_detail_falls_back_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let settings = remote_settings(&server);
    let catalog = Catalog::from_settings(&settings).unwrap();
    let detail = catalog.item_detail("acme", "kit", "gone").await;

    assert!(!detail.available);
    assert_eq!(
        detail.description,
        "Skill details are only available when connected to 127.0.0.1."
    );
}

#[tokio::test]
async fn test_repeat_fetch_within_ttl_hits_server_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .expect(1)
        .mount(&server)
        .await;

    let settings = remote_settings(&server);
    let catalog = Catalog::from_settings(&settings).unwrap();

    let first = catalog.all_items().await;
    let second = catalog.all_items().await;
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .expect(2)
        .mount(&server)
        .await;

    let settings = Settings {
        cache_ttl: Duration::from_secs(60),
        ..remote_settings(&server)
    };
    let clock = ManualClock::new();
    let fetcher = HttpFetcher::with_clock(&settings, Arc::new(clock.clone())).unwrap();
    let url = format!("{}/hot", server.uri());

    assert!(fetcher.fetch(&url).await.is_some());
    clock.advance(Duration::from_secs(59));
    assert!(fetcher.fetch(&url).await.is_some());
    clock.advance(Duration::from_secs(1));
    assert!(fetcher.fetch(&url).await.is_some());
}

#[tokio::test]
async fn test_search_proxies_json() {
    let server = MockServer::start().await;
    let body = json!({ "skills": [{ "name": "react-best-practices" }] });
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "react hooks"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let settings = remote_settings(&server);
    let catalog = Catalog::from_settings(&settings).unwrap();

    assert_eq!(catalog.search("react hooks", 5).await.unwrap(), body);
}

#[tokio::test]
async fn test_search_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let settings = remote_settings(&server);
    let catalog = Catalog::from_settings(&settings).unwrap();

    assert!(catalog.search("react", 10).await.is_err());
}

#[tokio::test]
async fn test_cache_size_cap_evicts_older_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .expect(1)
        .mount(&server)
        .await;

    let settings = Settings {
        cache_max_entries: 1,
        ..remote_settings(&server)
    };
    let fetcher = HttpFetcher::new(&settings).unwrap();
    let hot = format!("{}/hot", server.uri());
    let trending = format!("{}/trending", server.uri());

    assert!(fetcher.fetch(&hot).await.is_some());
    assert!(fetcher.fetch(&trending).await.is_some());
    // "/hot" was evicted to make room, so it is fetched again
    assert!(fetcher.fetch(&hot).await.is_some());
    assert_eq!(fetcher.cache().len(), 1);
}
