//! Application handlers.
//!
//! Query handlers that orchestrate catalog reads against the store port.

pub mod catalog;

pub use catalog::{
    FindOneHandler, FindOneQuery, ListPageHandler, ListPageQuery, SampleOneHandler,
};
