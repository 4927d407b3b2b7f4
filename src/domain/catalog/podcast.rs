//! Podcast document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{PodcastId, Timestamp};
use crate::ports::{Document, DocumentKind, Field, FieldValue, Sort};

/// A podcast as stored in the catalog.
///
/// `podlist_url` is the podcast's slug: unique across podcasts and the key
/// used for external lookups. It is assigned by the ingestion process and
/// never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Podcast {
    pub id: PodcastId,
    pub title: String,
    pub categories: Vec<String>,
    pub link: String,
    pub description: String,
    pub subtitle: String,
    pub owner: PodcastOwner,
    pub author: String,
    pub image: String,
    pub feed: String,
    pub podlist_url: String,
    pub updated: Option<Timestamp>,
}

/// Owner contact declared in the podcast feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastOwner {
    pub name: String,
    pub email: String,
}

impl Document for Podcast {
    const KIND: DocumentKind = DocumentKind::Podcast;
    const FIELDS: &'static [Field] = &[Field::Slug];

    fn default_sort() -> Sort {
        Sort::ascending(Field::Slug)
    }

    fn document_id(&self) -> Uuid {
        *self.id.as_uuid()
    }

    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Slug => Some(FieldValue::Text(&self.podlist_url)),
            Field::PodcastSlug | Field::Published => None,
        }
    }
}
