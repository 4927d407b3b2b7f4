//! ListPageHandler - Query handler for paginated listings.

use std::sync::Arc;

use crate::domain::catalog::{compute_bounds, CatalogError, ListPage, RequestedPage, PAGE_SIZE};
use crate::domain::catalog::{Episode, Podcast};
use crate::ports::{Document, DocumentStore, Field, Filter, FindOptions, Sort};

/// Query for one page of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPageQuery {
    /// Scope of the listing; `Filter::all()` for the whole collection.
    pub filter: Filter,
    pub sort: Sort,
    pub page: RequestedPage,
}

impl ListPageQuery {
    /// All podcasts by slug ascending.
    pub fn all_podcasts(page: RequestedPage) -> Self {
        Self {
            filter: Filter::all(),
            sort: Podcast::default_sort(),
            page,
        }
    }

    /// All episodes, newest first.
    pub fn all_episodes(page: RequestedPage) -> Self {
        Self {
            filter: Filter::all(),
            sort: Episode::default_sort(),
            page,
        }
    }

    /// Episodes of one podcast, newest first.
    pub fn episodes_of_podcast(podcast_slug: impl Into<String>, page: RequestedPage) -> Self {
        Self {
            filter: Filter::all().eq(Field::PodcastSlug, podcast_slug),
            sort: Episode::default_sort(),
            page,
        }
    }
}

/// Handler for paginated listings over one collection.
///
/// Count and scan are two separate store round trips. A write landing in
/// between can leave `all_count` stale relative to `items`; listings accept
/// that window rather than asking the store for snapshot isolation.
pub struct ListPageHandler<D: Document> {
    store: Arc<dyn DocumentStore<D>>,
}

impl<D: Document> ListPageHandler<D> {
    pub fn new(store: Arc<dyn DocumentStore<D>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListPageQuery) -> Result<ListPage<D>, CatalogError> {
        let all_count = self.store.count(&query.filter).await?;
        let bounds = compute_bounds(all_count, PAGE_SIZE, query.page);

        if !bounds.in_range {
            tracing::debug!(
                collection = D::KIND.collection(),
                page = query.page.get(),
                last_page = bounds.last_page,
                "Requested page is past the last page"
            );
            return Err(CatalogError::page_not_found());
        }

        let options = FindOptions::new(query.sort, bounds.skip, bounds.limit);
        let items = self.store.find(&query.filter, &options).await?;

        // The collection shrank between count and find.
        if items.is_empty() {
            return Err(CatalogError::page_not_found());
        }

        Ok(ListPage::new(items, all_count, &bounds, query.page))
    }
}
