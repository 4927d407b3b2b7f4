//! HTTP adapter for episode endpoints.
//!
//! - `GET /episode/all` - Paginated listing, newest first
//! - `GET /episode/podcast/:podcast_slug` - Paginated listing of one podcast
//! - `GET /episode/single/:podcast_slug/:episode_slug` - Lookup by slug pair
//!
//! Both listings also accept the page as a trailing path segment.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::EpisodeListResponse;
pub use routes::episode_routes;
