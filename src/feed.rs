// src/feed.rs
use crate::errors::ScanError;
use chrono::{DateTime, Utc};
use rss::Channel;

// === FEED ENTRY STRUCTURES ===

/// One media link attached to an entry, tagged with its declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    pub url: String,
    pub mime_type: String,
}

/// One feed item as seen by the novelty filter. Feeds are assumed to list
/// entries newest-first; this is the feed collaborator's invariant, not ours.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub title: String,
    /// Raw timestamp string as it appeared in the feed, kept for display.
    pub published_display: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub enclosures: Vec<Enclosure>,
}

impl FeedEntry {
    /// Effective publish moment: prefer `published`, fall back to `updated`.
    /// An entry with neither is fatal for the feed's scan.
    pub fn effective_moment(&self) -> Result<DateTime<Utc>, ScanError> {
        self.published
            .or(self.updated)
            .ok_or_else(|| ScanError::MissingTimestamp(self.title.clone()))
    }

    /// The first enclosure declared as `audio/mpeg`.
    pub fn audio_link(&self) -> Result<&str, ScanError> {
        self.enclosures
            .iter()
            .find(|e| e.mime_type == "audio/mpeg")
            .map(|e| e.url.as_str())
            .ok_or_else(|| ScanError::NoAudioLink(self.title.clone()))
    }
}

/// Ephemeral scanner output: what the download orchestrator consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub published_display: String,
    pub audio_link: String,
}

/// Maps a parsed RSS channel into our entry model, preserving item order.
pub fn entries_from_channel(channel: &Channel) -> Vec<FeedEntry> {
    channel
        .items()
        .iter()
        .map(|item| {
            let title = item.title().unwrap_or("(untitled)").to_string();

            let published_raw = item.pub_date().map(String::from);
            let published = published_raw
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc2822(s).ok())
                .map(|dt| dt.with_timezone(&Utc));

            // Some feeds carry <atom:updated> instead of <pubDate>.
            let updated_raw = item
                .extensions()
                .get("atom")
                .and_then(|ns| ns.get("updated"))
                .and_then(|exts| exts.first())
                .and_then(|ext| ext.value())
                .map(String::from);
            let updated = updated_raw
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc));

            let published_display = published_raw.or(updated_raw).unwrap_or_default();

            let enclosures = item
                .enclosure()
                .map(|e| {
                    vec![Enclosure {
                        url: e.url().to_string(),
                        mime_type: e.mime_type().to_string(),
                    }]
                })
                .unwrap_or_default();

            FeedEntry { title, published_display, published, updated, enclosures }
        })
        .collect()
}
