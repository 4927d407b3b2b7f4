//! Document store port (read-only queries).
//!
//! Defines the query contract the catalog issues against its backing store:
//! filtered count, filtered + sorted + paginated scan, and single-document
//! lookup. Adapters translate these into their native query language.
//!
//! # Design
//!
//! - **Closed field set**: queries only reference [`Field`] variants, never
//!   caller-supplied column names.
//! - **Tagged outcomes**: "no matching document" is a distinct
//!   [`StoreError::NoDocuments`] variant rather than a sentinel value.
//! - **Deterministic scans**: every scan also orders by document identity so
//!   that ties in the sort key never shuffle documents across pages.

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::foundation::Timestamp;

/// The two document collections served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Podcast,
    Episode,
}

impl DocumentKind {
    /// Name of the backing collection.
    pub fn collection(&self) -> &'static str {
        match self {
            DocumentKind::Podcast => "podcasts",
            DocumentKind::Episode => "episodes",
        }
    }
}

/// Queryable document fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The document's own slug (`podlistUrl`).
    Slug,
    /// Slug of the owning podcast (`podcastUrl`). Episodes only.
    PodcastSlug,
    /// Publication time. Episodes only.
    Published,
}

impl Field {
    /// External (wire) name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Slug => "podlistUrl",
            Field::PodcastSlug => "podcastUrl",
            Field::Published => "published",
        }
    }

    /// Whether the field holds text and can take part in an equality filter.
    pub fn is_text(&self) -> bool {
        !matches!(self, Field::Published)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed field value, used for in-process filtering and ordering.
///
/// A missing timestamp orders before any present one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Time(Option<Timestamp>),
}

/// A record type that can be read from a [`DocumentStore`].
pub trait Document: Clone + Send + Sync + 'static {
    /// Which collection the document lives in.
    const KIND: DocumentKind;

    /// Fields that exist on this document type.
    const FIELDS: &'static [Field];

    /// Ordering used when no other ordering is requested.
    fn default_sort() -> Sort;

    /// Stable identity, used as the final tie-breaker in every scan.
    fn document_id(&self) -> Uuid;

    /// Reads a field; `None` when the field does not exist on this type.
    fn field(&self, field: Field) -> Option<FieldValue<'_>>;
}

/// Conjunction of exact-match conditions.
///
/// The empty filter (`Filter::all()`) matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<(Field, String)>,
}

impl Filter {
    /// Matches every document in the collection.
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds an equality condition.
    pub fn eq(mut self, field: Field, value: impl Into<String>) -> Self {
        self.conditions.push((field, value.into()));
        self
    }

    /// The conditions, in insertion order.
    pub fn conditions(&self) -> &[(Field, String)] {
        &self.conditions
    }

    /// Checks that every condition names a text field that exists on `D`.
    pub fn validate_for<D: Document>(&self) -> Result<(), StoreError> {
        for (field, _) in &self.conditions {
            if !D::FIELDS.contains(field) || !field.is_text() {
                return Err(StoreError::MalformedQuery(format!(
                    "cannot filter {} by {}",
                    D::KIND.collection(),
                    field
                )));
            }
        }
        Ok(())
    }

    /// Evaluates the filter against a document.
    ///
    /// Call [`Filter::validate_for`] first; unknown fields never match.
    pub fn matches<D: Document>(&self, document: &D) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| match document.field(*field) {
                Some(FieldValue::Text(actual)) => actual == expected.as_str(),
                _ => false,
            })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ordering of a scan: one field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: Field,
    pub direction: SortDirection,
}

impl Sort {
    /// Ascending order on `field`.
    pub fn ascending(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending order on `field`.
    pub fn descending(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Checks that the sort field exists on `D`.
    pub fn validate_for<D: Document>(&self) -> Result<(), StoreError> {
        if D::FIELDS.contains(&self.field) {
            Ok(())
        } else {
            Err(StoreError::MalformedQuery(format!(
                "cannot sort {} by {}",
                D::KIND.collection(),
                self.field
            )))
        }
    }

    /// Compares two documents by this sort, then by identity ascending.
    pub fn compare<D: Document>(&self, a: &D, b: &D) -> Ordering {
        let by_field = a.field(self.field).cmp(&b.field(self.field));
        let by_field = match self.direction {
            SortDirection::Ascending => by_field,
            SortDirection::Descending => by_field.reverse(),
        };
        by_field.then_with(|| a.document_id().cmp(&b.document_id()))
    }
}

/// Sort and window of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    pub sort: Sort,
    /// Number of matching documents to skip.
    pub skip: u64,
    /// Maximum number of documents to return.
    pub limit: u64,
}

impl FindOptions {
    pub fn new(sort: Sort, skip: u64, limit: u64) -> Self {
        Self { sort, skip, limit }
    }
}

/// Outcome of a failed store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no document matches the filter")]
    NoDocuments,

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed query: {0}")]
    MalformedQuery(String),

    #[error("failed to decode document: {0}")]
    Decode(String),
}

/// Read-only access to one document collection.
#[async_trait]
pub trait DocumentStore<D: Document>: Send + Sync {
    /// Counts documents matching `filter`.
    async fn count(&self, filter: &Filter) -> Result<u64, StoreError>;

    /// Returns the matching documents inside the window described by
    /// `options`, in sort order.
    async fn find(&self, filter: &Filter, options: &FindOptions) -> Result<Vec<D>, StoreError>;

    /// Returns the single document matching `filter`.
    ///
    /// Returns [`StoreError::NoDocuments`] when nothing matches.
    async fn find_one(&self, filter: &Filter) -> Result<D, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Note {
        id: Uuid,
        slug: String,
        at: Option<Timestamp>,
    }

    impl Document for Note {
        const KIND: DocumentKind = DocumentKind::Podcast;
        const FIELDS: &'static [Field] = &[Field::Slug, Field::Published];

        fn default_sort() -> Sort {
            Sort::ascending(Field::Slug)
        }

        fn document_id(&self) -> Uuid {
            self.id
        }

        fn field(&self, field: Field) -> Option<FieldValue<'_>> {
            match field {
                Field::Slug => Some(FieldValue::Text(&self.slug)),
                Field::Published => Some(FieldValue::Time(self.at)),
                _ => None,
            }
        }
    }

    fn note(slug: &str, secs: Option<i64>) -> Note {
        Note {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            at: secs.and_then(Timestamp::from_unix_secs),
        }
    }

    // Trait object safety test
    #[test]
    fn document_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn DocumentStore<Note>) {}
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::all().matches(&note("a", None)));
    }

    #[test]
    fn filter_requires_all_conditions() {
        let doc = note("a", None);
        assert!(Filter::all().eq(Field::Slug, "a").matches(&doc));
        assert!(!Filter::all().eq(Field::Slug, "b").matches(&doc));
        assert!(!Filter::all()
            .eq(Field::Slug, "a")
            .eq(Field::Slug, "b")
            .matches(&doc));
    }

    #[test]
    fn filter_on_missing_field_is_malformed() {
        let filter = Filter::all().eq(Field::PodcastSlug, "x");
        assert!(matches!(
            filter.validate_for::<Note>(),
            Err(StoreError::MalformedQuery(_))
        ));
    }

    #[test]
    fn filter_on_time_field_is_malformed() {
        let filter = Filter::all().eq(Field::Published, "2024-01-01");
        assert!(filter.validate_for::<Note>().is_err());
    }

    #[test]
    fn sort_on_missing_field_is_malformed() {
        assert!(Sort::ascending(Field::PodcastSlug).validate_for::<Note>().is_err());
        assert!(Sort::descending(Field::Published).validate_for::<Note>().is_ok());
    }

    #[test]
    fn descending_time_sort_puts_missing_values_last() {
        let newest = note("n", Some(3_000));
        let oldest = note("o", Some(1_000));
        let undated = note("u", None);

        let mut docs = vec![undated.clone(), oldest.clone(), newest.clone()];
        let sort = Sort::descending(Field::Published);
        docs.sort_by(|a, b| sort.compare(a, b));

        let slugs: Vec<&str> = docs.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["n", "o", "u"]);
    }

    #[test]
    fn ties_are_broken_by_identity() {
        let mut a = note("same", None);
        let mut b = note("same", None);
        a.id = Uuid::from_u128(1);
        b.id = Uuid::from_u128(2);

        let sort = Sort::descending(Field::Slug);
        assert_eq!(sort.compare(&a, &b), Ordering::Less);
        assert_eq!(sort.compare(&b, &a), Ordering::Greater);
    }
}
