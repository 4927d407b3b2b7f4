//! Shared state for catalog endpoints.

use std::sync::Arc;

use crate::application::handlers::catalog::{FindOneHandler, ListPageHandler, SampleOneHandler};
use crate::domain::catalog::{Episode, Podcast};
use crate::ports::DocumentStore;

/// Store handles injected into every catalog request.
///
/// Built once at startup and cloned per request; clones share the stores.
#[derive(Clone)]
pub struct CatalogAppState {
    pub podcasts: Arc<dyn DocumentStore<Podcast>>,
    pub episodes: Arc<dyn DocumentStore<Episode>>,
}

impl CatalogAppState {
    pub fn new(
        podcasts: Arc<dyn DocumentStore<Podcast>>,
        episodes: Arc<dyn DocumentStore<Episode>>,
    ) -> Self {
        Self { podcasts, episodes }
    }

    /// Create handlers on demand from the shared state.
    pub fn podcast_list_handler(&self) -> ListPageHandler<Podcast> {
        ListPageHandler::new(self.podcasts.clone())
    }

    pub fn podcast_lookup_handler(&self) -> FindOneHandler<Podcast> {
        FindOneHandler::new(self.podcasts.clone())
    }

    pub fn podcast_sample_handler(&self) -> SampleOneHandler<Podcast> {
        SampleOneHandler::new(self.podcasts.clone())
    }

    pub fn episode_list_handler(&self) -> ListPageHandler<Episode> {
        ListPageHandler::new(self.episodes.clone())
    }

    pub fn episode_lookup_handler(&self) -> FindOneHandler<Episode> {
        FindOneHandler::new(self.episodes.clone())
    }
}
