use anyhow::Result;
use clap::Parser;
use podpull::app::{self, RunOptions};
use podpull::download::WgetDownloader;
use podpull::feed_fetch::HttpFeedFetcher;
use podpull::prompt::confirm;
use std::path::PathBuf;

/// Checks podcast feeds for new episodes and downloads them via wget.
#[derive(Parser, Debug)]
#[command(name = "podpull", version, about)]
struct Args {
    /// Path to the state file (feeds and last check time)
    #[arg(long, default_value = "state.json")]
    state: PathBuf,

    /// Directory the episodes are downloaded into
    #[arg(long, default_value = "~/Downloads")]
    dir: String,

    /// Download without asking for confirmation
    #[arg(long)]
    yes: bool,
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let opts = RunOptions {
        state_path: args.state,
        download_dir: expand_tilde(&args.dir),
    };
    let fetcher = HttpFeedFetcher::new();
    let downloader = WgetDownloader::new();

    app::run(&opts, &fetcher, &downloader, || {
        if args.yes {
            Ok(true)
        } else {
            confirm("Download new podcasts?", false)
        }
    })
}
