//! Episode document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{EpisodeId, PodcastId, Timestamp};
use crate::ports::{Document, DocumentKind, Field, FieldValue, Sort};

/// An episode as stored in the catalog.
///
/// The pair (`podcast_url`, `podlist_url`) is unique and is the natural key
/// for single-episode lookup. Podcast title and image are denormalized copies
/// of the owning podcast's values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: EpisodeId,
    pub podlist_url: String,
    pub podcast_id: PodcastId,
    pub podcast_url: String,
    pub podcast_title: String,
    pub podcast_image: String,
    pub guid: String,
    pub title: String,
    pub published: Option<Timestamp>,
    pub duration: String,
    pub summary: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub content: String,
    pub enclosure: EpisodeEnclosure,
}

/// Media file attached to an episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeEnclosure {
    pub filesize: String,
    pub filetype: String,
    pub url: String,
}

impl Document for Episode {
    const KIND: DocumentKind = DocumentKind::Episode;
    const FIELDS: &'static [Field] = &[
        Field::Slug,
        Field::PodcastSlug,
        Field::Published,
    ];

    /// Newest first.
    fn default_sort() -> Sort {
        Sort::descending(Field::Published)
    }

    fn document_id(&self) -> Uuid {
        *self.id.as_uuid()
    }

    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Slug => Some(FieldValue::Text(&self.podlist_url)),
            Field::PodcastSlug => Some(FieldValue::Text(&self.podcast_url)),
            Field::Published => Some(FieldValue::Time(self.published)),
        }
    }
}
