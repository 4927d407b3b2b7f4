//! Row types for the `podcasts` and `episodes` tables.
//!
//! Every column except the identities is nullable; nulls decode to empty
//! strings and empty lists so the wire format matches documents that simply
//! omit a field.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::catalog::{Episode, EpisodeEnclosure, Podcast, PodcastOwner};
use crate::domain::foundation::{EpisodeId, PodcastId, Timestamp};

/// Database row for podcast queries.
#[derive(Debug, sqlx::FromRow)]
pub struct PodcastRow {
    id: Uuid,
    title: Option<String>,
    categories: Option<Vec<String>>,
    link: Option<String>,
    description: Option<String>,
    subtitle: Option<String>,
    owner_name: Option<String>,
    owner_email: Option<String>,
    author: Option<String>,
    image: Option<String>,
    feed: Option<String>,
    podlist_url: Option<String>,
    updated: Option<DateTime<Utc>>,
}

impl PodcastRow {
    pub const COLUMNS: &'static str = "id, title, categories, link, description, subtitle, \
        owner_name, owner_email, author, image, feed, podlist_url, updated";
}

impl From<PodcastRow> for Podcast {
    fn from(row: PodcastRow) -> Self {
        Self {
            id: PodcastId::from_uuid(row.id),
            title: row.title.unwrap_or_default(),
            categories: row.categories.unwrap_or_default(),
            link: row.link.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            subtitle: row.subtitle.unwrap_or_default(),
            owner: PodcastOwner {
                name: row.owner_name.unwrap_or_default(),
                email: row.owner_email.unwrap_or_default(),
            },
            author: row.author.unwrap_or_default(),
            image: row.image.unwrap_or_default(),
            feed: row.feed.unwrap_or_default(),
            podlist_url: row.podlist_url.unwrap_or_default(),
            updated: row.updated.map(Timestamp::from_datetime),
        }
    }
}

/// Database row for episode queries.
#[derive(Debug, sqlx::FromRow)]
pub struct EpisodeRow {
    id: Uuid,
    podlist_url: Option<String>,
    podcast_id: Uuid,
    podcast_url: Option<String>,
    podcast_title: Option<String>,
    podcast_image: Option<String>,
    guid: Option<String>,
    title: Option<String>,
    published: Option<DateTime<Utc>>,
    duration: Option<String>,
    summary: Option<String>,
    subtitle: Option<String>,
    description: Option<String>,
    image: Option<String>,
    content: Option<String>,
    enclosure_filesize: Option<String>,
    enclosure_filetype: Option<String>,
    enclosure_url: Option<String>,
}

impl EpisodeRow {
    pub const COLUMNS: &'static str = "id, podlist_url, podcast_id, podcast_url, podcast_title, \
        podcast_image, guid, title, published, duration, summary, subtitle, description, image, \
        content, enclosure_filesize, enclosure_filetype, enclosure_url";
}

impl From<EpisodeRow> for Episode {
    fn from(row: EpisodeRow) -> Self {
        Self {
            id: EpisodeId::from_uuid(row.id),
            podlist_url: row.podlist_url.unwrap_or_default(),
            podcast_id: PodcastId::from_uuid(row.podcast_id),
            podcast_url: row.podcast_url.unwrap_or_default(),
            podcast_title: row.podcast_title.unwrap_or_default(),
            podcast_image: row.podcast_image.unwrap_or_default(),
            guid: row.guid.unwrap_or_default(),
            title: row.title.unwrap_or_default(),
            published: row.published.map(Timestamp::from_datetime),
            duration: row.duration.unwrap_or_default(),
            summary: row.summary.unwrap_or_default(),
            subtitle: row.subtitle.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            image: row.image.unwrap_or_default(),
            content: row.content.unwrap_or_default(),
            enclosure: EpisodeEnclosure {
                filesize: row.enclosure_filesize.unwrap_or_default(),
                filetype: row.enclosure_filetype.unwrap_or_default(),
                url: row.enclosure_url.unwrap_or_default(),
            },
        }
    }
}
