//! Domain layer containing catalog types and query rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps)
//! - `catalog` - Podcast and episode documents, pagination, error taxonomy

pub mod catalog;
pub mod foundation;
