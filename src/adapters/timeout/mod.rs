//! Deadline adapters.
//!
//! - `TimedDocumentStore` - Bounds every store operation with a timeout

mod document_store;

pub use document_store::TimedDocumentStore;
