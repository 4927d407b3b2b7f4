//! In-memory adapters.
//!
//! - `InMemoryDocumentStore` - Vec-backed document collection for tests and
//!   local development

mod document_store;

pub use document_store::InMemoryDocumentStore;
