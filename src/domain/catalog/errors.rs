//! Catalog error taxonomy and store-outcome classification.

use thiserror::Error;

use crate::ports::StoreError;

/// Message for a lookup that matched nothing.
pub const DOCUMENT_NOT_FOUND: &str = "Document not found";

/// Message for a page number past the last page.
pub const PAGE_NOT_FOUND: &str = "Page does not exist";

/// Message for sampling a collection with no documents.
pub const COLLECTION_EMPTY: &str = "Collection is empty";

/// Message returned in place of any internal failure detail.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// The two outcomes a catalog query can fail with.
///
/// Both are terminal for the request; neither is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Nothing matched a required lookup, the page is past the end, or the
    /// sampled collection is empty.
    #[error("{0}")]
    NotFound(String),

    /// Any other failure. Detail is logged, never carried.
    #[error("{}", INTERNAL_ERROR)]
    Internal,
}

impl CatalogError {
    pub fn document_not_found() -> Self {
        CatalogError::NotFound(DOCUMENT_NOT_FOUND.to_string())
    }

    pub fn page_not_found() -> Self {
        CatalogError::NotFound(PAGE_NOT_FOUND.to_string())
    }

    pub fn collection_empty() -> Self {
        CatalogError::NotFound(COLLECTION_EMPTY.to_string())
    }

    /// Maps a store outcome onto the catalog taxonomy.
    ///
    /// Only [`StoreError::NoDocuments`] is a not-found; everything else is
    /// logged here and reported as [`CatalogError::Internal`].
    pub fn classify(error: StoreError) -> Self {
        match error {
            StoreError::NoDocuments => Self::document_not_found(),
            StoreError::Timeout(_)
            | StoreError::Unavailable(_)
            | StoreError::MalformedQuery(_)
            | StoreError::Decode(_) => {
                tracing::error!(error = %error, "Store operation failed");
                CatalogError::Internal
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }

    /// Message safe to return to callers.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::classify(err)
    }
}
