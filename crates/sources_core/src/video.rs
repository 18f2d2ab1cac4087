use std::sync::OnceLock;

use regex::Regex;

use crate::clean_url;

/// Watch-parameter, short-link and embed forms, tried in that order.
fn video_id_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"(?i)youtube\.com/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]{11,})")
                .expect("valid watch url regex"),
            Regex::new(r"(?i)youtu\.be/([A-Za-z0-9_-]{11,})").expect("valid short url regex"),
            Regex::new(r"(?i)youtube\.com/embed/([A-Za-z0-9_-]{11,})")
                .expect("valid embed url regex"),
        ]
    })
}

/// Extracts the YouTube video id from a (possibly escaped) URL.
pub fn youtube_video_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    let cleaned = clean_url(url);
    video_id_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(&cleaned))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// Player URL for an extracted id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}
