//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers and time values shared by the catalog documents.

mod ids;
mod timestamp;

pub use ids::{EpisodeId, PodcastId};
pub use timestamp::Timestamp;
