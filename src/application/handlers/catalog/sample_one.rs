//! SampleOneHandler - Query handler for uniform random sampling.

use std::sync::Arc;

use rand::Rng;

use crate::domain::catalog::CatalogError;
use crate::ports::{Document, DocumentStore, Filter, FindOptions};

/// Handler returning one document chosen uniformly at random.
///
/// Draws a fresh offset in `[0, count)` on every call and fetches the
/// document at that position in the collection's default order. Nothing is
/// cached between calls.
pub struct SampleOneHandler<D: Document> {
    store: Arc<dyn DocumentStore<D>>,
}

impl<D: Document> SampleOneHandler<D> {
    pub fn new(store: Arc<dyn DocumentStore<D>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<D, CatalogError> {
        let filter = Filter::all();
        let count = self.store.count(&filter).await?;
        if count == 0 {
            tracing::debug!(collection = D::KIND.collection(), "Cannot sample an empty collection");
            return Err(CatalogError::collection_empty());
        }

        let offset = rand::thread_rng().gen_range(0..count);
        let options = FindOptions::new(D::default_sort(), offset, 1);

        self.store
            .find(&filter, &options)
            .await?
            .into_iter()
            .next()
            .ok_or_else(CatalogError::collection_empty)
    }
}
