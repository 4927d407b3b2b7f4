//! HTTP handlers for episode endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::catalog::{FindOneQuery, ListPageQuery};
use crate::domain::catalog::RequestedPage;

use super::super::error::CatalogApiError;
use super::super::extract::PageParam;
use super::super::state::CatalogAppState;
use super::dto::EpisodeListResponse;

/// GET /episode/all?page=N - One page of episodes, newest first
pub async fn list_episodes(
    State(state): State<CatalogAppState>,
    PageParam(page): PageParam,
) -> Result<impl IntoResponse, CatalogApiError> {
    list_page(&state, ListPageQuery::all_episodes(page)).await
}

/// GET /episode/all/:page - Path-style variant of `list_episodes`
pub async fn list_episodes_at(
    State(state): State<CatalogAppState>,
    Path(page): Path<String>,
) -> Result<impl IntoResponse, CatalogApiError> {
    let page = RequestedPage::parse(Some(page.as_str()));
    list_page(&state, ListPageQuery::all_episodes(page)).await
}

/// GET /episode/podcast/:podcast_slug?page=N - One page of a podcast's episodes
pub async fn list_podcast_episodes(
    State(state): State<CatalogAppState>,
    Path(podcast_slug): Path<String>,
    PageParam(page): PageParam,
) -> Result<impl IntoResponse, CatalogApiError> {
    list_page(&state, ListPageQuery::episodes_of_podcast(podcast_slug, page)).await
}

/// GET /episode/podcast/:podcast_slug/:page - Path-style variant of `list_podcast_episodes`
pub async fn list_podcast_episodes_at(
    State(state): State<CatalogAppState>,
    Path((podcast_slug, page)): Path<(String, String)>,
) -> Result<impl IntoResponse, CatalogApiError> {
    let page = RequestedPage::parse(Some(page.as_str()));
    list_page(&state, ListPageQuery::episodes_of_podcast(podcast_slug, page)).await
}

/// GET /episode/single/:podcast_slug/:episode_slug - One episode by slug pair
pub async fn get_episode(
    State(state): State<CatalogAppState>,
    Path((podcast_slug, episode_slug)): Path<(String, String)>,
) -> Result<impl IntoResponse, CatalogApiError> {
    let episode = state
        .episode_lookup_handler()
        .handle(FindOneQuery::episode_by_slugs(podcast_slug, episode_slug))
        .await?;
    Ok(Json(episode))
}

async fn list_page(
    state: &CatalogAppState,
    query: ListPageQuery,
) -> Result<Json<EpisodeListResponse>, CatalogApiError> {
    let list = state.episode_list_handler().handle(query).await?;
    Ok(Json(EpisodeListResponse::from(list)))
}
