// src/download.rs
use crate::errors::DownloadError;
use crate::feed::Post;
use crate::filename::destination_filename;
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub url: String,
    pub filename: String,
}

/// Derives one fetch directive per post, in post order.
pub fn jobs_from_posts(posts: &[Post]) -> Vec<DownloadJob> {
    posts
        .iter()
        .map(|post| DownloadJob {
            url: post.audio_link.clone(),
            filename: destination_filename(&post.title, &post.audio_link),
        })
        .collect()
}

// ===== downloader seam
//
// The download collaborator: URL/destination pairs in, aggregate exit status
// out (0 is success, anything else means at least one item failed).
pub trait Downloader {
    fn fetch_all(&self, dest_dir: &Path, jobs: &[DownloadJob]) -> Result<i32, DownloadError>;
}

// ===== Live wget downloader
pub struct WgetDownloader {
    program: String,
}

impl WgetDownloader {
    pub fn new() -> Self {
        Self { program: "wget".to_string() }
    }

    #[cfg(test)]
    fn with_program(program: &str) -> Self {
        Self { program: program.to_string() }
    }
}

impl Default for WgetDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader for WgetDownloader {
    fn fetch_all(&self, dest_dir: &Path, jobs: &[DownloadJob]) -> Result<i32, DownloadError> {
        fs::create_dir_all(dest_dir).map_err(|source| DownloadError::CreateDirectory {
            path: dest_dir.to_path_buf(),
            source,
        })?;

        let mut aggregate: i32 = 0;
        for job in jobs {
            info!("downloading {} -> {}", job.url, job.filename);
            let status = Command::new(&self.program)
                .arg(&job.url)
                .arg("-O")
                .arg(dest_dir.join(&job.filename))
                .status()
                .map_err(DownloadError::Spawn)?;
            if !status.success() {
                warn!("download of {} exited with {}", job.url, status);
                if aggregate == 0 {
                    // Killed by a signal leaves no code; report a sentinel.
                    aggregate = status.code().unwrap_or(-1);
                }
            }
        }
        Ok(aggregate)
    }
}

// ===== Fake downloader for testing
pub struct FakeDownloader {
    pub status: i32,
    pub jobs_seen: std::cell::RefCell<Vec<DownloadJob>>,
}

impl FakeDownloader {
    pub fn with_status(status: i32) -> Self {
        Self { status, jobs_seen: std::cell::RefCell::new(Vec::new()) }
    }
}

impl Downloader for FakeDownloader {
    fn fetch_all(&self, _dest_dir: &Path, jobs: &[DownloadJob]) -> Result<i32, DownloadError> {
        self.jobs_seen.borrow_mut().extend(jobs.iter().cloned());
        Ok(self.status)
    }
}
