//! HTTP adapter for podcast endpoints.
//!
//! - `GET /podcast/random` - Uniformly sampled podcast
//! - `GET /podcast/all` - Paginated listing (`?page=N` or `/all/:page`)
//! - `GET /podcast/single/:slug` - Lookup by slug

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::PodcastListResponse;
pub use routes::podcast_routes;
