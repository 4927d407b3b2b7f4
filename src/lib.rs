//! Podgo - Read-only HTTP query service for a podcast catalog
//!
//! Serves paginated podcast and episode listings, single-document lookups,
//! and uniform random sampling over a document store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
