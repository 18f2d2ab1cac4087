use std::sync::OnceLock;

use regex::Regex;
use sources_core::{has_image_extension, Source, SourceKind};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescribeError {
    #[error("a source needs a url")]
    MissingUrl,
    #[error("invalid source url {url}: {message}")]
    InvalidUrl { url: String, message: String },
}

/// Caller-supplied fields for a single source; everything but `url` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDraft {
    pub url: String,
    pub title: Option<String>,
    pub kind: Option<SourceKind>,
    pub description: Option<String>,
}

impl SourceDraft {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

fn video_url_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"(?i)(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)")
                .expect("valid video url regex"),
            Regex::new(r"(?i)youtube\.com/shorts/").expect("valid shorts url regex"),
            Regex::new(r"(?i)youtube\.com/v/").expect("valid legacy video url regex"),
        ]
    })
}

/// Turns a draft into a complete record.
///
/// A `link` kind (the default) is upgraded to `video` for YouTube player URLs
/// and to `image` for image file URLs. A missing title is derived from the
/// last path segment, or the host when the path is empty.
pub fn describe_source(draft: SourceDraft, timestamp: String) -> Result<Source, DescribeError> {
    let url = draft.url.trim();
    if url.is_empty() {
        return Err(DescribeError::MissingUrl);
    }
    let parsed = Url::parse(url).map_err(|err| DescribeError::InvalidUrl {
        url: url.to_string(),
        message: err.to_string(),
    })?;

    let kind = match draft.kind.unwrap_or_default() {
        SourceKind::Link => detect_kind(url),
        explicit => explicit,
    };
    let title = draft
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| derive_title(&parsed));

    Ok(Source {
        url: url.to_string(),
        title,
        kind,
        description: draft.description.filter(|d| !d.trim().is_empty()),
        timestamp: Some(timestamp),
        category: None,
    })
}

pub(crate) fn detect_kind(url: &str) -> SourceKind {
    if video_url_patterns().iter().any(|p| p.is_match(url)) {
        SourceKind::Video
    } else if has_image_extension(url) {
        SourceKind::Image
    } else {
        SourceKind::Link
    }
}

fn derive_title(url: &Url) -> String {
    let last_segment = url
        .path()
        .trim_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    if last_segment.is_empty() {
        return host_label(url);
    }
    let stem = match last_segment.rfind('.') {
        Some(dot) if dot > 0 => &last_segment[..dot],
        _ => last_segment,
    };
    title_case(&stem.replace(['-', '_'], " "))
}

fn host_label(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    }
}

/// Uppercases the first letter of every alphabetic run, lowercases the rest.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2024-01-01T00:00:00+00:00";

    fn describe(draft: SourceDraft) -> Source {
        describe_source(draft, NOW.to_string()).unwrap()
    }

    #[test]
    fn link_kind_is_upgraded_from_url() {
        assert_eq!(
            describe(SourceDraft::new("https://www.youtube.com/shorts/abc")).kind,
            SourceKind::Video
        );
        assert_eq!(
            describe(SourceDraft::new("https://x.com/photo.JPG")).kind,
            SourceKind::Image
        );
        assert_eq!(
            describe(SourceDraft::new("https://x.com/article")).kind,
            SourceKind::Link
        );
    }

    #[test]
    fn explicit_non_link_kind_is_kept() {
        let draft = SourceDraft {
            kind: Some(SourceKind::Image),
            ..SourceDraft::new("https://youtu.be/dQw4w9WgXcQ")
        };
        assert_eq!(describe(draft).kind, SourceKind::Image);
    }

    #[test]
    fn title_is_derived_from_path_or_host() {
        assert_eq!(
            describe(SourceDraft::new("https://x.com/docs/getting-started_guide.html")).title,
            "Getting Started Guide"
        );
        assert_eq!(describe(SourceDraft::new("https://x.com/")).title, "x.com");
        assert_eq!(
            describe(SourceDraft::new("http://localhost:8080")).title,
            "localhost:8080"
        );
    }

    #[test]
    fn timestamp_and_description_are_carried() {
        let draft = SourceDraft {
            title: Some("  Given ".into()),
            description: Some("why it matters".into()),
            ..SourceDraft::new("https://x.com/a")
        };
        let source = describe(draft);
        assert_eq!(source.title, "Given");
        assert_eq!(source.description.as_deref(), Some("why it matters"));
        assert_eq!(source.timestamp.as_deref(), Some(NOW));
    }

    #[test]
    fn empty_or_invalid_url_is_rejected() {
        assert_eq!(
            describe_source(SourceDraft::new("  "), NOW.into()),
            Err(DescribeError::MissingUrl)
        );
        assert!(matches!(
            describe_source(SourceDraft::new("not a url"), NOW.into()),
            Err(DescribeError::InvalidUrl { .. })
        ));
    }
}
