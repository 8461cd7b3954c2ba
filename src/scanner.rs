// src/scanner.rs
use crate::errors::ScanError;
use crate::feed::Post;
use crate::feed_fetch::{FeedFetcher, fetch_entries};
use crate::novelty::newer_than;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use log::debug;

/// Walks every configured feed and collects the episodes published after
/// `state.last_download`, in feed iteration order then feed order.
///
/// Prints the per-feed report as it goes; any scan error aborts the whole run
/// before a single download happens.
pub fn check_for_new_posts(
    state: &AppState,
    fetcher: &dyn FeedFetcher,
) -> Result<Vec<Post>, ScanError> {
    // Out-of-range timestamps clamp to the epoch.
    let last_check_time: DateTime<Utc> =
        DateTime::from_timestamp(state.last_download, 0).unwrap_or(DateTime::UNIX_EPOCH);

    let mut posts: Vec<Post> = Vec::new();
    for (podcast, params) in &state.feeds {
        let entries = fetch_entries(&params.url, fetcher)?;

        // Some feeds pin a non-episode promotional insert as their first item.
        let entries = if params.skip_promo() && !entries.is_empty() {
            &entries[1..]
        } else {
            &entries[..]
        };

        let new_entries = newer_than(last_check_time, entries)?;
        println!("\n{} podcast has {} posts later than {}", podcast, new_entries.len(), last_check_time);

        for entry in new_entries {
            let link = entry.audio_link()?;
            println!(
                "\n\ttitle: '{}'\n\tpublished: {}\n\tlink: {}",
                entry.title, entry.published_display, link
            );
            posts.push(Post {
                title: entry.title.clone(),
                published_display: entry.published_display.clone(),
                audio_link: link.to_string(),
            });
        }
        debug!("scanned feed '{}'; {} posts collected so far", podcast, posts.len());
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FeedConfig;
    use std::collections::{BTreeMap, HashMap};

    // Per-URL fake, for multi-feed scans.
    struct MapFetcher {
        responses: HashMap<String, String>,
    }

    impl FeedFetcher for MapFetcher {
        fn fetch(&self, url: &str) -> Result<String, ScanError> {
            Ok(self.responses.get(url).cloned().unwrap_or_default())
        }
    }

    fn feed_xml(items: &[(&str, &str, &str)]) -> String {
        let items: String = items
            .iter()
            .map(|(title, date, link)| {
                format!(
                    r#"<item>
                        <title>{title}</title>
                        <pubDate>{date}</pubDate>
                        <enclosure url="{link}" length="1" type="audio/mpeg"/>
                    </item>"#
                )
            })
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <rss version="2.0">
                <channel>
                    <title>T</title>
                    <link>http://example.com</link>
                    <description>D</description>
                    {items}
                </channel>
            </rss>"#
        )
    }

    fn state_with(feeds: Vec<(&str, &str, bool)>, last_download: i64) -> AppState {
        let feeds: BTreeMap<String, FeedConfig> = feeds
            .into_iter()
            .map(|(name, url, skip_promo)| {
                (
                    name.to_string(),
                    FeedConfig {
                        url: url.to_string(),
                        skip_promo: skip_promo.then_some(true),
                    },
                )
            })
            .collect();
        AppState { feeds, last_download }
    }

    // Dates picked so their unix timestamps straddle the cutoff of 1000 used
    // in every test below.
    const NEWER: &str = "Wed, 01 Jan 2020 00:00:00 +0000"; // unix 1577836800
    const OLDER: &str = "Thu, 01 Jan 1970 00:08:20 +0000"; // unix 500

    #[test]
    fn test_one_new_post_with_audio_link() {
        let xml = feed_xml(&[
            ("Fresh", NEWER, "http://x/fresh.mp3"),
            ("Stale", OLDER, "http://x/stale.mp3"),
        ]);
        let fetcher =
            MapFetcher { responses: HashMap::from([("http://x/feed".to_string(), xml)]) };
        let state = state_with(vec![("Show A", "http://x/feed", false)], 1000);

        let posts = check_for_new_posts(&state, &fetcher).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Fresh");
        assert_eq!(posts[0].audio_link, "http://x/fresh.mp3");
        assert_eq!(posts[0].published_display, NEWER);
    }

    #[test]
    fn test_skip_promo_drops_newest_entry_before_filtering() {
        // The promo entry is newer than the cutoff, the real latest episode is
        // older; with skip_promo the run must find nothing new.
        let xml = feed_xml(&[
            ("Promo", NEWER, "http://x/promo.mp3"),
            ("Stale", OLDER, "http://x/stale.mp3"),
        ]);
        let fetcher =
            MapFetcher { responses: HashMap::from([("http://x/feed".to_string(), xml)]) };
        let state = state_with(vec![("Show A", "http://x/feed", true)], 1000);

        let posts = check_for_new_posts(&state, &fetcher).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_skip_promo_on_empty_feed() {
        let xml = feed_xml(&[]);
        let fetcher =
            MapFetcher { responses: HashMap::from([("http://x/feed".to_string(), xml)]) };
        let state = state_with(vec![("Show A", "http://x/feed", true)], 1000);

        let posts = check_for_new_posts(&state, &fetcher).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_posts_come_out_in_feed_name_order() {
        let xml_a = feed_xml(&[("A1", NEWER, "http://a/1.mp3")]);
        let xml_b = feed_xml(&[("B1", NEWER, "http://b/1.mp3")]);
        let fetcher = MapFetcher {
            responses: HashMap::from([
                ("http://a/feed".to_string(), xml_a),
                ("http://b/feed".to_string(), xml_b),
            ]),
        };
        // BTreeMap iterates in key order regardless of insertion order.
        let state = state_with(
            vec![("Zeta", "http://b/feed", false), ("Alpha", "http://a/feed", false)],
            1000,
        );

        let posts = check_for_new_posts(&state, &fetcher).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "A1");
        assert_eq!(posts[1].title, "B1");
    }

    #[test]
    fn test_new_post_without_audio_link_aborts_the_scan() {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <rss version="2.0">
                <channel>
                    <title>T</title>
                    <link>http://example.com</link>
                    <description>D</description>
                    <item>
                        <title>No Audio</title>
                        <pubDate>{NEWER}</pubDate>
                    </item>
                </channel>
            </rss>"#
        );
        let fetcher =
            MapFetcher { responses: HashMap::from([("http://x/feed".to_string(), xml)]) };
        let state = state_with(vec![("Show A", "http://x/feed", false)], 1000);

        let result = check_for_new_posts(&state, &fetcher);
        assert!(matches!(result, Err(ScanError::NoAudioLink(ref t)) if t == "No Audio"));
    }
}
