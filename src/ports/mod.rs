//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `DocumentStore` - Read-only queries against one document collection

mod document_store;

pub use document_store::{
    Document, DocumentKind, DocumentStore, Field, FieldValue, Filter, FindOptions, Sort,
    SortDirection, StoreError,
};
