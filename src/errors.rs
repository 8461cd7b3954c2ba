// errors.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("RSS parsing error: {0}")]
    Rss(#[from] rss::Error),

    #[error("entry '{0}' has neither a published nor an updated timestamp")]
    MissingTimestamp(String),

    #[error("entry '{0}' has no audio/mpeg enclosure")]
    NoAudioLink(String),
}

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to read state file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to write state file {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("State file {path} is malformed: {source}")]
    Malformed { path: PathBuf, source: serde_json::Error },
}

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Failed to create download directory {path}: {source}")]
    CreateDirectory { path: PathBuf, source: std::io::Error },

    #[error("Failed to run download tool: {0}")]
    Spawn(std::io::Error),
}
