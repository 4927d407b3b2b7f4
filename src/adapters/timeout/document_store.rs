//! Deadline-bounded document store decorator.
//!
//! Every operation on the wrapped store is raced against a fixed timeout.
//! When the timeout wins, the inner future is dropped (abandoning the
//! in-flight query) and the caller sees [`StoreError::Timeout`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{Document, DocumentStore, Filter, FindOptions, StoreError};

/// Wraps a [`DocumentStore`] so no operation outlives `timeout`.
pub struct TimedDocumentStore<D: Document> {
    inner: Arc<dyn DocumentStore<D>>,
    timeout: Duration,
}

impl<D: Document> TimedDocumentStore<D> {
    /// Creates a decorator bounding each operation of `inner` by `timeout`.
    pub fn new(inner: Arc<dyn DocumentStore<D>>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    collection = D::KIND.collection(),
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Store operation timed out"
                );
                Err(StoreError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl<D: Document> DocumentStore<D> for TimedDocumentStore<D> {
    async fn count(&self, filter: &Filter) -> Result<u64, StoreError> {
        self.bounded("count", self.inner.count(filter)).await
    }

    async fn find(&self, filter: &Filter, options: &FindOptions) -> Result<Vec<D>, StoreError> {
        self.bounded("find", self.inner.find(filter, options)).await
    }

    async fn find_one(&self, filter: &Filter) -> Result<D, StoreError> {
        self.bounded("find_one", self.inner.find_one(filter)).await
    }
}
