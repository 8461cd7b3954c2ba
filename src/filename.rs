// src/filename.rs
use url::Url;

fn is_valid_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '(' | ')' | ' ')
}

/// Reduces a title to a filesystem-safe name: disallowed characters are
/// dropped, spaces become underscores, order is preserved.
pub fn clean_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| is_valid_char(*c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Destination filename for a post: when the link's path already ends in
/// `.mp3` the final path segment is used verbatim, otherwise the sanitized
/// title with an `.mp3` extension.
pub fn destination_filename(title: &str, audio_link: &str) -> String {
    if let Ok(url) = Url::parse(audio_link) {
        if url.path().ends_with(".mp3") {
            if let Some(segment) = url.path_segments().and_then(|segments| segments.last()) {
                return segment.to_string();
            }
        }
    } else if audio_link.ends_with(".mp3") {
        // Relative or otherwise unparseable link; fall back to a raw split.
        if let Some(segment) = audio_link.rsplit('/').next() {
            return segment.to_string();
        }
    }
    clean_filename(title) + ".mp3"
}
