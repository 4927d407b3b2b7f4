//! End-to-end tests of the catalog HTTP surface over in-memory stores.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use podgo::adapters::http::episode::EpisodeListResponse;
use podgo::adapters::http::podcast::PodcastListResponse;
use podgo::adapters::http::ErrorResponse;
use podgo::adapters::{build_app, CatalogAppState, InMemoryDocumentStore, TimedDocumentStore};
use podgo::config::ServerConfig;
use podgo::domain::catalog::{Episode, EpisodeEnclosure, Podcast, PodcastOwner};
use podgo::domain::foundation::{PodcastId, Timestamp};
use podgo::ports::{DocumentStore, Filter, FindOptions, StoreError};

// =============================================================================
// Fixtures
// =============================================================================

fn podcast(slug: &str) -> Podcast {
    Podcast {
        id: PodcastId::new(),
        title: format!("Show {}", slug),
        categories: vec!["Technology".to_string()],
        link: format!("https://example.com/{}", slug),
        description: "A show".to_string(),
        subtitle: "Weekly".to_string(),
        owner: PodcastOwner {
            name: "Host".to_string(),
            email: "host@example.com".to_string(),
        },
        author: "Host".to_string(),
        image: format!("https://example.com/{}.png", slug),
        feed: format!("https://example.com/{}.rss", slug),
        podlist_url: slug.to_string(),
        updated: Timestamp::from_unix_secs(1_700_000_000),
    }
}

fn episode(show: &Podcast, slug: &str, published: i64) -> Episode {
    Episode {
        podlist_url: slug.to_string(),
        podcast_id: show.id,
        podcast_url: show.podlist_url.clone(),
        podcast_title: show.title.clone(),
        podcast_image: show.image.clone(),
        guid: format!("{}-{}", show.podlist_url, slug),
        title: format!("Episode {}", slug),
        published: Timestamp::from_unix_secs(published),
        duration: "00:30:00".to_string(),
        enclosure: EpisodeEnclosure {
            filesize: "1000".to_string(),
            filetype: "audio/mpeg".to_string(),
            url: format!("https://cdn.example.com/{}.mp3", slug),
        },
        ..Default::default()
    }
}

fn app(podcasts: Vec<Podcast>, episodes: Vec<Episode>) -> Router {
    let state = CatalogAppState::new(
        Arc::new(InMemoryDocumentStore::with_documents(podcasts)),
        Arc::new(InMemoryDocumentStore::with_documents(episodes)),
    );
    build_app(state, &ServerConfig::default())
}

async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Store that never answers within any reasonable deadline.
struct HangingStore;

#[async_trait]
impl DocumentStore<Podcast> for HangingStore {
    async fn count(&self, _filter: &Filter) -> Result<u64, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(0)
    }

    async fn find(
        &self,
        _filter: &Filter,
        _options: &FindOptions,
    ) -> Result<Vec<Podcast>, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Vec::new())
    }

    async fn find_one(&self, _filter: &Filter) -> Result<Podcast, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Err(StoreError::NoDocuments)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn stored_podcast_round_trips_through_lookup() {
    let stored = podcast("the-daily");
    let app = app(vec![stored.clone(), podcast("hard-fork")], Vec::new());

    let (status, found): (_, Podcast) = get_json(app, "/podcast/single/the-daily").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, stored);
}

#[tokio::test]
async fn podcast_listing_paginates_by_slug() {
    let podcasts = (0..25).map(|i| podcast(&format!("show-{:02}", i))).collect();
    let app = app(podcasts, Vec::new());

    let (status, page): (_, PodcastListResponse) =
        get_json(app.clone(), "/podcast/all?page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.all_count, 25);
    assert_eq!(page.page_size, 12);
    assert_eq!(page.last_page, 3);
    assert_eq!(page.podcasts.len(), 1);
    assert_eq!(page.podcasts[0].podlist_url, "show-24");

    let (status, error): (_, ErrorResponse) = get_json(app, "/podcast/all?page=4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error, ErrorResponse::new("Page does not exist"));
}

#[tokio::test]
async fn episode_listing_is_scoped_and_newest_first() {
    let daily = podcast("the-daily");
    let fork = podcast("hard-fork");
    let episodes = vec![
        episode(&daily, "mon", 100),
        episode(&fork, "ep-1", 150),
        episode(&daily, "wed", 300),
        episode(&daily, "tue", 200),
    ];
    let app = app(vec![daily, fork], episodes);

    let (status, page): (_, EpisodeListResponse) =
        get_json(app, "/episode/podcast/the-daily").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.all_count, 3);
    let slugs: Vec<&str> = page.episodes.iter().map(|e| e.podlist_url.as_str()).collect();
    assert_eq!(slugs, vec!["wed", "tue", "mon"]);
    assert!(page.episodes.iter().all(|e| e.podcast_url == "the-daily"));
}

#[tokio::test]
async fn episode_lookup_uses_both_slugs() {
    let daily = podcast("the-daily");
    let stored = episode(&daily, "mon", 100);
    let app = app(vec![daily], vec![stored.clone()]);

    let (status, found): (_, Episode) =
        get_json(app.clone(), "/episode/single/the-daily/mon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, stored);

    let (status, error): (_, ErrorResponse) =
        get_json(app, "/episode/single/hard-fork/mon").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.error, "Document not found");
}

#[tokio::test]
async fn random_podcast_on_empty_catalog_is_not_found() {
    let app = app(Vec::new(), Vec::new());

    let (status, error): (_, ErrorResponse) = get_json(app, "/podcast/random").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.error, "Collection is empty");
}

#[tokio::test]
async fn slow_store_is_cut_off_as_internal_error() {
    let podcasts = Arc::new(TimedDocumentStore::<Podcast>::new(
        Arc::new(HangingStore),
        Duration::from_millis(20),
    ));
    let episodes = Arc::new(InMemoryDocumentStore::<Episode>::new());
    let state = CatalogAppState::new(podcasts, episodes);
    let app = build_app(state, &ServerConfig::default());

    let (status, error): (_, ErrorResponse) = get_json(app, "/podcast/all").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.error, "Internal server error");
}
