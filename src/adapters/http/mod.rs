//! HTTP adapters - REST API over the catalog.
//!
//! Each collection has its own module (`podcast`, `episode`) with DTOs,
//! handlers, and routes. `catalog_router` mounts both; `build_app` adds the
//! tower-http middleware stack used in production.

pub mod episode;
pub mod error;
pub mod extract;
pub mod podcast;
pub mod state;

pub use episode::episode_routes;
pub use error::{CatalogApiError, ErrorResponse};
pub use extract::PageParam;
pub use podcast::podcast_routes;
pub use state::CatalogAppState;

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Creates the catalog router with every endpoint.
///
/// Routes:
/// - `/podcast/...` - see [`podcast_routes`]
/// - `/episode/...` - see [`episode_routes`]
///
/// Unknown paths fall through to axum's default 404.
pub fn catalog_router() -> Router<CatalogAppState> {
    Router::new()
        .nest("/podcast", podcast_routes())
        .nest("/episode", episode_routes())
}

/// Builds the servable application: routes, state, and middleware.
pub fn build_app(state: CatalogAppState, server: &ServerConfig) -> Router {
    let mut app = catalog_router().with_state(state);

    if let Some(cors) = cors_layer(server) {
        app = app.layer(cors);
    }

    app.layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins; `None` when no origin is configured.
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET]),
    )
}
