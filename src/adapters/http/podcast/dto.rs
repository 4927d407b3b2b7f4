//! HTTP DTOs for podcast endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{ListPage, Podcast};

/// One page of podcasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastListResponse {
    pub podcasts: Vec<Podcast>,
    pub all_count: u64,
    pub page_size: u64,
    pub page: u64,
    pub last_page: u64,
}

impl From<ListPage<Podcast>> for PodcastListResponse {
    fn from(list: ListPage<Podcast>) -> Self {
        Self {
            podcasts: list.items,
            all_count: list.all_count,
            page_size: list.page_size,
            page: list.page,
            last_page: list.last_page,
        }
    }
}
