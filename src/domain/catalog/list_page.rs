//! Paginated listing envelope.

use serde::{Deserialize, Serialize};

use super::pagination::{PageBounds, RequestedPage};

/// One page of a listing plus the metadata needed to navigate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage<T> {
    /// Documents on this page, in listing order.
    pub items: Vec<T>,

    /// Total documents matching the listing's filter.
    pub all_count: u64,

    /// Fixed page size the listing was computed with.
    pub page_size: u64,

    /// The page that was requested.
    pub page: u64,

    /// `ceil(all_count / page_size)`.
    pub last_page: u64,
}

impl<T> ListPage<T> {
    /// Wraps a materialized page using the bounds it was fetched with.
    pub fn new(items: Vec<T>, all_count: u64, bounds: &PageBounds, page: RequestedPage) -> Self {
        Self {
            items,
            all_count,
            page_size: bounds.limit,
            page: page.get(),
            last_page: bounds.last_page,
        }
    }
}
