// src/novelty.rs
use crate::errors::ScanError;
use crate::feed::FeedEntry;
use chrono::{DateTime, Utc};

/// Returns the longest prefix of `entries` whose effective publish moment is
/// strictly later than `after`.
///
/// Entries are assumed newest-first, so the scan stops at the first entry that
/// is not strictly newer; everything past it is guaranteed older and is never
/// examined. An entry with no usable timestamp aborts the whole feed's scan.
pub fn newer_than<'a>(
    after: DateTime<Utc>,
    entries: &'a [FeedEntry],
) -> Result<Vec<&'a FeedEntry>, ScanError> {
    let mut new_entries = Vec::new();
    for entry in entries {
        if entry.effective_moment()? > after {
            new_entries.push(entry);
        } else {
            break;
        }
    }
    Ok(new_entries)
}
