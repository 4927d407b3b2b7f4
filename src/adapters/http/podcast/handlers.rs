//! HTTP handlers for podcast endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::catalog::{FindOneQuery, ListPageQuery};
use crate::domain::catalog::RequestedPage;

use super::super::error::CatalogApiError;
use super::super::extract::PageParam;
use super::super::state::CatalogAppState;
use super::dto::PodcastListResponse;

/// GET /podcast/random - One podcast chosen uniformly at random
pub async fn random_podcast(
    State(state): State<CatalogAppState>,
) -> Result<impl IntoResponse, CatalogApiError> {
    let podcast = state.podcast_sample_handler().handle().await?;
    Ok(Json(podcast))
}

/// GET /podcast/all?page=N - One page of podcasts ordered by slug
pub async fn list_podcasts(
    State(state): State<CatalogAppState>,
    PageParam(page): PageParam,
) -> Result<impl IntoResponse, CatalogApiError> {
    list_page(&state, page).await
}

/// GET /podcast/all/:page - Path-style variant of `list_podcasts`
pub async fn list_podcasts_at(
    State(state): State<CatalogAppState>,
    Path(page): Path<String>,
) -> Result<impl IntoResponse, CatalogApiError> {
    list_page(&state, RequestedPage::parse(Some(page.as_str()))).await
}

/// GET /podcast/single/:slug - One podcast by slug
pub async fn get_podcast(
    State(state): State<CatalogAppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, CatalogApiError> {
    let podcast = state
        .podcast_lookup_handler()
        .handle(FindOneQuery::podcast_by_slug(slug))
        .await?;
    Ok(Json(podcast))
}

async fn list_page(
    state: &CatalogAppState,
    page: RequestedPage,
) -> Result<Json<PodcastListResponse>, CatalogApiError> {
    let list = state
        .podcast_list_handler()
        .handle(ListPageQuery::all_podcasts(page))
        .await?;
    Ok(Json(PodcastListResponse::from(list)))
}
