//! In-memory document store implementation.
//!
//! Evaluates filters and sorts in process with the same semantics as the
//! PostgreSQL adapter: exact-match filters, identity as the final
//! tie-breaker, missing timestamps ordered lowest.
//!
//! # Security Note
//!
//! This adapter is intended for tests and local development. It keeps the
//! whole collection in memory and offers no persistence.

use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard};

use crate::ports::{Document, DocumentStore, Filter, FindOptions, StoreError};

/// Vec-backed document collection.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryDocumentStore::with_documents(vec![podcast]);
/// let total = store.count(&Filter::all()).await?;
/// ```
pub struct InMemoryDocumentStore<D> {
    documents: RwLock<Vec<D>>,
}

impl<D: Document> InMemoryDocumentStore<D> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Creates a collection holding `documents`.
    pub fn with_documents(documents: impl IntoIterator<Item = D>) -> Self {
        Self {
            documents: RwLock::new(documents.into_iter().collect()),
        }
    }

    // === Test Helpers ===

    /// Adds a document to the collection.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, document: D) {
        self.documents
            .write()
            .expect("InMemoryDocumentStore: documents lock poisoned")
            .push(document);
    }

    /// Number of stored documents, ignoring any filter.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn len(&self) -> usize {
        self.documents
            .read()
            .expect("InMemoryDocumentStore: documents lock poisoned")
            .len()
    }

    /// True when the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<D>>, StoreError> {
        self.documents
            .read()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

impl<D: Document> Default for InMemoryDocumentStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Document> DocumentStore<D> for InMemoryDocumentStore<D> {
    async fn count(&self, filter: &Filter) -> Result<u64, StoreError> {
        filter.validate_for::<D>()?;
        let documents = self.read()?;
        Ok(documents.iter().filter(|d| filter.matches(*d)).count() as u64)
    }

    async fn find(&self, filter: &Filter, options: &FindOptions) -> Result<Vec<D>, StoreError> {
        filter.validate_for::<D>()?;
        options.sort.validate_for::<D>()?;

        let mut matching: Vec<D> = {
            let documents = self.read()?;
            documents
                .iter()
                .filter(|d| filter.matches(*d))
                .cloned()
                .collect()
        };
        matching.sort_by(|a, b| options.sort.compare(a, b));

        let skip = usize::try_from(options.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(options.limit).unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(skip).take(limit).collect())
    }

    async fn find_one(&self, filter: &Filter) -> Result<D, StoreError> {
        filter.validate_for::<D>()?;
        let sort = D::default_sort();
        let documents = self.read()?;
        documents
            .iter()
            .filter(|d| filter.matches(*d))
            .min_by(|a, b| sort.compare(*a, *b))
            .cloned()
            .ok_or(StoreError::NoDocuments)
    }
}
