//! Catalog module - podcasts, episodes, and how they are paged.
//!
//! The catalog is read-only: documents are created and updated by an
//! external ingestion process and only ever read here.

mod episode;
mod errors;
mod list_page;
mod pagination;
mod podcast;

pub use episode::{Episode, EpisodeEnclosure};
pub use errors::{
    CatalogError, COLLECTION_EMPTY, DOCUMENT_NOT_FOUND, INTERNAL_ERROR, PAGE_NOT_FOUND,
};
pub use list_page::ListPage;
pub use pagination::{compute_bounds, PageBounds, RequestedPage, PAGE_SIZE};
pub use podcast::{Podcast, PodcastOwner};
