// src/state.rs
use crate::errors::StateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// === PERSISTED STATE ===
//
// JSON on disk:
//   { "feeds": { "<name>": { "url": "...", "skip_promo": true }, ... },
//     "last_download": 1715700000 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_promo: Option<bool>,
}

impl FeedConfig {
    pub fn skip_promo(&self) -> bool {
        self.skip_promo.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    // BTreeMap keeps feed iteration order deterministic (name order).
    pub feeds: BTreeMap<String, FeedConfig>,
    pub last_download: i64,
}

impl AppState {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<AppState, StateError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| StateError::Read { path: path.to_path_buf(), source })?;
        serde_json::from_str(&content)
            .map_err(|source| StateError::Malformed { path: path.to_path_buf(), source })
    }

    // Direct overwrite, 2-space indentation. Not atomic; a single process
    // instance writing at most once per run is the supported usage.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StateError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|source| StateError::Malformed { path: path.to_path_buf(), source })?;
        fs::write(path, json)
            .map_err(|source| StateError::Write { path: path.to_path_buf(), source })
    }
}
