//! Route configuration for podcast endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::CatalogAppState;
use super::handlers::{get_podcast, list_podcasts, list_podcasts_at, random_podcast};

/// Creates the podcast router, mounted at `/podcast`.
///
/// Routes:
/// - `GET /random` - Uniformly sampled podcast
/// - `GET /all?page=N` - Paginated listing
/// - `GET /all/:page` - Paginated listing, page in the path
/// - `GET /single/:slug` - Lookup by slug
pub fn podcast_routes() -> Router<CatalogAppState> {
    Router::new()
        .route("/random", get(random_podcast))
        .route("/all", get(list_podcasts))
        .route("/all/:page", get(list_podcasts_at))
        .route("/single/:slug", get(get_podcast))
}
