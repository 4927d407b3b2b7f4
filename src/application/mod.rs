//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The catalog is read-only, so every handler here is a query handler.

pub mod handlers;

pub use handlers::{
    FindOneHandler, FindOneQuery, ListPageHandler, ListPageQuery, SampleOneHandler,
};
