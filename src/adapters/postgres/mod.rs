//! PostgreSQL adapters for the document store port.
//!
//! - `PostgresDocumentStore` - generic read-only queries over one table
//! - `connect` - pool construction from `DatabaseConfig`

mod document_store;
mod errors;
mod pool;
mod rows;

pub use document_store::{PgDocument, PostgresDocumentStore};
pub use errors::map_sqlx_error;
pub use pool::connect;
pub use rows::{EpisodeRow, PodcastRow};
