//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the catalog to external systems:
//! - `http` - axum REST surface
//! - `postgres` - PostgreSQL-backed document store
//! - `memory` - in-process document store
//! - `timeout` - per-operation deadline around any document store

pub mod http;
pub mod memory;
pub mod postgres;
pub mod timeout;

pub use self::http::{build_app, catalog_router, CatalogAppState};
pub use memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
pub use timeout::TimedDocumentStore;
