// src/app.rs
use crate::download::{Downloader, jobs_from_posts};
use crate::feed_fetch::FeedFetcher;
use crate::scanner::check_for_new_posts;
use crate::state::AppState;
use anyhow::Result;
use chrono::Utc;
use log::info;
use std::io;
use std::path::PathBuf;

pub struct RunOptions {
    pub state_path: PathBuf,
    pub download_dir: PathBuf,
}

/// One full check-confirm-download pass.
///
/// State is loaded once, threaded through as a value, and written back at most
/// once: only when the download tool's aggregate exit status is success. A
/// declined prompt or a failed download leaves the state file untouched, so
/// the missed episodes are found again on the next run.
pub fn run<F>(
    opts: &RunOptions,
    fetcher: &dyn FeedFetcher,
    downloader: &dyn Downloader,
    confirm_download: F,
) -> Result<()>
where
    F: FnOnce() -> io::Result<bool>,
{
    let mut state = AppState::load(&opts.state_path)?;

    // The cutoff for the *next* run is the moment this scan began, so
    // episodes published mid-run are not skipped over.
    let start_time = Utc::now().timestamp();

    let posts = check_for_new_posts(&state, fetcher)?;

    if !confirm_download()? {
        info!("download declined; state left untouched");
        return Ok(());
    }

    let jobs = jobs_from_posts(&posts);
    match downloader.fetch_all(&opts.download_dir, &jobs) {
        Ok(0) => {
            println!("\nDownload tool finished with exit code 0");
            println!("Updating {}", opts.state_path.display());
            state.last_download = start_time;
            state.save(&opts.state_path)?;
            println!("Download completed!");
        }
        Ok(code) => {
            println!("\nDownload tool finished with exit code {}", code);
            println!("State not updated; these episodes will show up again next run.");
        }
        Err(err) => {
            println!("\nDownload tool could not run: {}", err);
            println!("State not updated; these episodes will show up again next run.");
        }
    }
    Ok(())
}
