//! Route configuration for episode endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::CatalogAppState;
use super::handlers::{
    get_episode, list_episodes, list_episodes_at, list_podcast_episodes,
    list_podcast_episodes_at,
};

/// Creates the episode router, mounted at `/episode`.
///
/// Routes:
/// - `GET /all?page=N` - All episodes, newest first
/// - `GET /all/:page`
/// - `GET /podcast/:podcast_slug?page=N` - Episodes of one podcast
/// - `GET /podcast/:podcast_slug/:page`
/// - `GET /single/:podcast_slug/:episode_slug` - Lookup by slug pair
pub fn episode_routes() -> Router<CatalogAppState> {
    Router::new()
        .route("/all", get(list_episodes))
        .route("/all/:page", get(list_episodes_at))
        .route("/podcast/:podcast_slug", get(list_podcast_episodes))
        .route("/podcast/:podcast_slug/:page", get(list_podcast_episodes_at))
        .route("/single/:podcast_slug/:episode_slug", get(get_episode))
}
