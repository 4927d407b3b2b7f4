//! HTTP DTOs for episode endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Episode, ListPage};

/// One page of episodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeListResponse {
    pub episodes: Vec<Episode>,
    pub all_count: u64,
    pub page_size: u64,
    pub page: u64,
    pub last_page: u64,
}

impl From<ListPage<Episode>> for EpisodeListResponse {
    fn from(list: ListPage<Episode>) -> Self {
        Self {
            episodes: list.items,
            all_count: list.all_count,
            page_size: list.page_size,
            page: list.page,
            last_page: list.last_page,
        }
    }
}
