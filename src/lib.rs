// src/lib.rs
pub mod app;
pub mod download;
pub mod errors;
pub mod feed;
pub mod feed_fetch;
pub mod filename;
pub mod novelty;
pub mod prompt;
pub mod scanner;
pub mod state;
