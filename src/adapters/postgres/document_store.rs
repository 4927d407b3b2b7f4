//! PostgreSQL implementation of DocumentStore.
//!
//! One generic store serves both collections; per-type table layout comes
//! from [`PgDocument`]. Every query is assembled with `QueryBuilder` so that
//! filter values are always bound, never interpolated.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row};

use crate::domain::catalog::{Episode, Podcast};
use crate::ports::{
    Document, DocumentStore, Field, Filter, FindOptions, Sort, SortDirection, StoreError,
};

use super::errors::map_sqlx_error;
use super::rows::{EpisodeRow, PodcastRow};

/// Table layout of a document type.
pub trait PgDocument: Document + From<Self::Row> {
    /// Row type decoded from a `SELECT COLUMNS FROM TABLE` query.
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    const TABLE: &'static str;

    /// Column list selected by scans and lookups.
    const COLUMNS: &'static str;

    /// Column backing a queryable field, if the table has one.
    fn column(field: Field) -> Option<&'static str>;
}

impl PgDocument for Podcast {
    type Row = PodcastRow;

    const TABLE: &'static str = "podcasts";
    const COLUMNS: &'static str = PodcastRow::COLUMNS;

    fn column(field: Field) -> Option<&'static str> {
        match field {
            Field::Slug => Some("podlist_url"),
            Field::PodcastSlug | Field::Published => None,
        }
    }
}

impl PgDocument for Episode {
    type Row = EpisodeRow;

    const TABLE: &'static str = "episodes";
    const COLUMNS: &'static str = EpisodeRow::COLUMNS;

    fn column(field: Field) -> Option<&'static str> {
        match field {
            Field::Slug => Some("podlist_url"),
            Field::PodcastSlug => Some("podcast_url"),
            Field::Published => Some("published"),
        }
    }
}

/// PostgreSQL-backed document store for one table.
pub struct PostgresDocumentStore<D> {
    pool: PgPool,
    _document: PhantomData<fn() -> D>,
}

impl<D> Clone for PostgresDocumentStore<D> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _document: PhantomData,
        }
    }
}

impl<D: PgDocument> std::fmt::Debug for PostgresDocumentStore<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresDocumentStore")
            .field("table", &D::TABLE)
            .field("pool", &"PgPool")
            .finish()
    }
}

impl<D: PgDocument> PostgresDocumentStore<D> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _document: PhantomData,
        }
    }
}

fn column_for<D: PgDocument>(field: Field) -> Result<&'static str, StoreError> {
    D::column(field).ok_or_else(|| {
        StoreError::MalformedQuery(format!("{} has no column for {}", D::TABLE, field))
    })
}

fn push_filter<D: PgDocument>(
    builder: &mut QueryBuilder<'static, Postgres>,
    filter: &Filter,
) -> Result<(), StoreError> {
    filter.validate_for::<D>()?;

    for (index, (field, value)) in filter.conditions().iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(column_for::<D>(*field)?);
        builder.push(" = ");
        builder.push_bind(value.clone());
    }
    Ok(())
}

fn push_order<D: PgDocument>(
    builder: &mut QueryBuilder<'static, Postgres>,
    sort: &Sort,
) -> Result<(), StoreError> {
    sort.validate_for::<D>()?;

    builder.push(" ORDER BY ");
    builder.push(column_for::<D>(sort.field)?);
    // NULLs sort lowest, matching the in-memory ordering.
    builder.push(match sort.direction {
        SortDirection::Ascending => " ASC NULLS FIRST",
        SortDirection::Descending => " DESC NULLS LAST",
    });
    builder.push(", id ASC");
    Ok(())
}

fn to_sql_bound(value: u64, what: &str) -> Result<i64, StoreError> {
    i64::try_from(value)
        .map_err(|_| StoreError::MalformedQuery(format!("{what} {value} is out of range")))
}

pub(crate) fn count_query<D: PgDocument>(
    filter: &Filter,
) -> Result<QueryBuilder<'static, Postgres>, StoreError> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", D::TABLE));
    push_filter::<D>(&mut builder, filter)?;
    Ok(builder)
}

pub(crate) fn find_query<D: PgDocument>(
    filter: &Filter,
    options: &FindOptions,
) -> Result<QueryBuilder<'static, Postgres>, StoreError> {
    let limit = to_sql_bound(options.limit, "limit")?;
    let offset = to_sql_bound(options.skip, "skip")?;

    let mut builder = QueryBuilder::new(format!("SELECT {} FROM {}", D::COLUMNS, D::TABLE));
    push_filter::<D>(&mut builder, filter)?;
    push_order::<D>(&mut builder, &options.sort)?;
    builder.push(" LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);
    Ok(builder)
}

pub(crate) fn find_one_query<D: PgDocument>(
    filter: &Filter,
) -> Result<QueryBuilder<'static, Postgres>, StoreError> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM {}", D::COLUMNS, D::TABLE));
    push_filter::<D>(&mut builder, filter)?;
    push_order::<D>(&mut builder, &D::default_sort())?;
    builder.push(" LIMIT 1");
    Ok(builder)
}

#[async_trait]
impl<D: PgDocument> DocumentStore<D> for PostgresDocumentStore<D> {
    async fn count(&self, filter: &Filter) -> Result<u64, StoreError> {
        let mut query = count_query::<D>(filter)?;
        let row = query
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let count: i64 = row
            .try_get(0)
            .map_err(|e| StoreError::Decode(format!("Failed to get count: {}", e)))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn find(&self, filter: &Filter, options: &FindOptions) -> Result<Vec<D>, StoreError> {
        let mut query = find_query::<D>(filter, options)?;
        let rows = query
            .build_query_as::<D::Row>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(D::from).collect())
    }

    async fn find_one(&self, filter: &Filter) -> Result<D, StoreError> {
        let mut query = find_one_query::<D>(filter)?;
        let row = query
            .build_query_as::<D::Row>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(D::from).ok_or(StoreError::NoDocuments)
    }
}
