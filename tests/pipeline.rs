use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use letscout::api::{ApiError, MockPropertySource, PropertyQuery, PropertySource};
use letscout::config::AppConfig;
use letscout::models::RawProperty;
use letscout::search::{load_detail, Debouncer, DetailState, FeedState, PropertyFeed, LOAD_ERROR};

fn raw(id: &str, title: &str, created_at: &str) -> RawProperty {
    RawProperty {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        rent_amount: 1000.0,
        property_type: "apartment".to_string(),
        location_id: None,
        address: None,
        city: Some("Dublin City".to_string()),
        county: Some("Dublin".to_string()),
        zip_code: None,
        contact_phone: None,
        contact_whatsapp: None,
        owner_id: None,
        is_active: Some(true),
        created_at: Some(created_at.to_string()),
        image_urls: None,
    }
}

/// Source whose responses take different amounts of time depending on the
/// search term, to provoke out-of-order arrivals.
struct DelayedSource;

#[async_trait]
impl PropertySource for DelayedSource {
    async fn fetch(&self, query: &PropertyQuery) -> Result<Vec<RawProperty>, ApiError> {
        match query.search.as_deref() {
            Some("slow") => {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok(vec![raw("stale", "Stale result", "2026-02-01T00:00:00Z")])
            }
            _ => {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(vec![raw("fresh", "Fresh result", "2026-02-08T00:00:00Z")])
            }
        }
    }

    async fn fetch_one(&self, _id: &str) -> Result<RawProperty, ApiError> {
        Err(ApiError::NotFound)
    }

    fn source_name(&self) -> &'static str {
        "delayed"
    }
}

/// Source that always fails with a server error
struct BrokenSource;

#[async_trait]
impl PropertySource for BrokenSource {
    async fn fetch(&self, _query: &PropertyQuery) -> Result<Vec<RawProperty>, ApiError> {
        Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
    }

    async fn fetch_one(&self, _id: &str) -> Result<RawProperty, ApiError> {
        Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
    }

    fn source_name(&self) -> &'static str {
        "broken"
    }
}

/// Source that records every query it receives
#[derive(Default)]
struct RecordingSource {
    queries: Mutex<Vec<PropertyQuery>>,
}

#[async_trait]
impl PropertySource for RecordingSource {
    async fn fetch(&self, query: &PropertyQuery) -> Result<Vec<RawProperty>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(vec![])
    }

    async fn fetch_one(&self, _id: &str) -> Result<RawProperty, ApiError> {
        Err(ApiError::NotFound)
    }

    fn source_name(&self) -> &'static str {
        "recording"
    }
}

#[tokio::test]
async fn feed_loads_normalized_and_sorted_listings() {
    let config = AppConfig::default();
    let feed = PropertyFeed::new(Arc::new(MockPropertySource::new()), config.clone());
    feed.refresh().await.unwrap();

    let properties = feed.properties().await;
    assert!(!properties.is_empty());

    // Default sort is latest first
    let newest = &properties[0];
    assert_eq!(newest.id, "mock-1");

    // Every listing has photos, real or fallback, with absolute URLs
    for property in &properties {
        assert!(!property.images.is_empty());
        for image in &property.images {
            assert!(image.starts_with("http"), "relative URL survived: {image}");
        }
    }
}

#[tokio::test]
async fn county_and_type_filters_and_combine_via_the_query() {
    let config = AppConfig::default();
    let mut feed = PropertyFeed::new(Arc::new(MockPropertySource::new()), config);

    feed.update_criteria(|criteria| {
        criteria.county = Some("Dublin".to_string());
        criteria.property_type = Some(letscout::models::PropertyType::Room);
    })
    .await
    .unwrap();

    // Dublin has listings and rooms exist elsewhere, but no Dublin room
    assert!(feed.properties().await.is_empty());
    assert!(matches!(feed.state().await, FeedState::Loaded(_)));
}

#[tokio::test(start_paused = true)]
async fn a_slow_stale_response_never_overwrites_a_newer_one() {
    let config = AppConfig::default();
    let mut feed = PropertyFeed::new(Arc::new(DelayedSource), config);

    let slow = feed.commit_search("slow");
    let fast = feed.commit_search("fast");

    fast.await.unwrap();
    slow.await.unwrap();

    // The slow response arrived last but belongs to the older request
    let properties = feed.properties().await;
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].id, "fresh");
}

#[tokio::test]
async fn fetch_failure_becomes_a_display_error_with_an_empty_result_set() {
    let config = AppConfig::default();
    let feed = PropertyFeed::new(Arc::new(BrokenSource), config);
    feed.refresh().await.unwrap();

    assert_eq!(feed.state().await, FeedState::Failed(LOAD_ERROR.to_string()));
    assert!(feed.properties().await.is_empty());
}

#[tokio::test]
async fn detail_page_distinguishes_not_found_from_load_failure() {
    let config = AppConfig::default();

    let mock = MockPropertySource::new();
    assert_eq!(load_detail(&mock, "no-such-id", &config).await, DetailState::NotFound);

    match load_detail(&mock, "mock-2", &config).await {
        DetailState::Loaded(property) => {
            assert_eq!(property.id, "mock-2");
            assert!(!property.images.is_empty());
        }
        other => panic!("expected a loaded listing, got {other:?}"),
    }

    assert_eq!(
        load_detail(&BrokenSource, "mock-2", &config).await,
        DetailState::Failed(LOAD_ERROR.to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn debounced_typing_issues_one_backend_query_with_the_final_text() {
    let config = AppConfig::default();
    let source = Arc::new(RecordingSource::default());
    let mut feed = PropertyFeed::new(Arc::clone(&source), config.clone());

    let (mut debouncer, mut committed) = Debouncer::new(config.debounce);
    debouncer.keystroke("D");
    debouncer.keystroke("Du");
    debouncer.keystroke("Dub");

    let term = committed.recv().await.unwrap();
    assert_eq!(term, "Dub");
    feed.commit_search(&term).await.unwrap();

    // One coalesced commit, one backend query, carrying the search term
    let queries = source.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].search.as_deref(), Some("Dub"));
}
