use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Hosts whose URLs are treated as videos even when a record is typed as a link.
const VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be"];

/// File extensions that mark a URL as an image.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Kind of a source as declared by the producer (JSON field `type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Link,
    Image,
    Video,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Link => "link",
            SourceKind::Image => "image",
            SourceKind::Video => "video",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered link, image or video reference with display metadata.
///
/// The `url` is the record's identity inside a stored collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Source {
    pub fn new(url: impl Into<String>, title: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            kind,
            description: None,
            timestamp: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// A link whose URL points at a video host.
    pub fn is_video_like_link(&self) -> bool {
        self.kind == SourceKind::Link && is_video_hosting_url(&self.url)
    }

    /// Declared video, or a link that points at a video host.
    pub fn is_effectively_video(&self) -> bool {
        self.kind == SourceKind::Video || self.is_video_like_link()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Undo the escaping tool output leaves in URLs: `\"` becomes `"`, literal
/// `\n` sequences are dropped, surrounding whitespace is trimmed.
pub fn clean_url(url: &str) -> String {
    url.replace("\\\"", "\"")
        .replace("\\n", "")
        .trim()
        .to_string()
}

/// True only for URLs that parse with an `http` or `https` scheme; anything
/// else must not end up in an `href` or `src`.
pub fn is_web_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}

pub fn is_video_hosting_url(url: &str) -> bool {
    VIDEO_HOSTS.iter().any(|host| url.contains(host))
}

pub fn has_image_extension(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.strip_suffix(*ext).is_some_and(|rest| rest.ends_with('.')))
}
