// src/feed_fetch.rs
use crate::errors::ScanError;
use crate::feed::{FeedEntry, entries_from_channel};
use log::info;
use reqwest::blocking::Client;
use rss::Channel;

// ===== fetcher seam
//
// The feed collaborator: given a URL, yields the raw feed document. Narrow on
// purpose so the scanner is testable without network access.
pub trait FeedFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScanError>;
}

// ===== Live http fetcher
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        const APP_USER_AGENT: &str = "podpull/0.1 (podcast feed checker)";

        let client: Client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create request client.");

        Self { client }
    }
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedFetcher for HttpFeedFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScanError> {
        info!("HttpFeedFetcher: fetching {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

// ===== Fake fetcher for testing
pub struct FakeFetcher {
    pub response: String,
}

impl FeedFetcher for FakeFetcher {
    fn fetch(&self, _url: &str) -> Result<String, ScanError> {
        Ok(self.response.clone())
    }
}

/// Fetches a feed and maps it into our entry model, newest-first as the feed
/// lists them.
pub fn fetch_entries(
    url: &str,
    fetcher: &dyn FeedFetcher,
) -> Result<Vec<FeedEntry>, ScanError> {
    let content: String = fetcher.fetch(url)?;
    info!("fetch_entries: content fetched for {}, length: {}", url, content.len());
    let channel: Channel = Channel::read_from(content.as_bytes())?;
    Ok(entries_from_channel(&channel))
}
