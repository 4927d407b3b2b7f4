//! FindOneHandler - Query handler for single-document lookups.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::ports::{Document, DocumentStore, Field, Filter, StoreError};

/// Query identifying exactly one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOneQuery {
    pub filter: Filter,
}

impl FindOneQuery {
    /// A podcast by its slug.
    pub fn podcast_by_slug(slug: impl Into<String>) -> Self {
        Self {
            filter: Filter::all().eq(Field::Slug, slug),
        }
    }

    /// An episode by its podcast's slug plus its own slug.
    pub fn episode_by_slugs(
        podcast_slug: impl Into<String>,
        episode_slug: impl Into<String>,
    ) -> Self {
        Self {
            filter: Filter::all()
                .eq(Field::PodcastSlug, podcast_slug)
                .eq(Field::Slug, episode_slug),
        }
    }
}

/// Handler for single-document lookups.
pub struct FindOneHandler<D: Document> {
    store: Arc<dyn DocumentStore<D>>,
}

impl<D: Document> FindOneHandler<D> {
    pub fn new(store: Arc<dyn DocumentStore<D>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: FindOneQuery) -> Result<D, CatalogError> {
        let result = self.store.find_one(&query.filter).await;
        if matches!(result, Err(StoreError::NoDocuments)) {
            tracing::debug!(
                collection = D::KIND.collection(),
                filter = ?query.filter,
                "No document matched lookup"
            );
        }
        Ok(result?)
    }
}
