use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use sources_core::{clean_url, has_image_extension, is_video_hosting_url, Source, SourceKind};
use sources_logging::{gallery_debug, gallery_warn};

use crate::describe::{detect_kind, title_case};
use crate::KindFilter;

const FALLBACK_TITLE: &str = "Link";
const TEXT_DESCRIPTION: &str = "Found in provided content";

/// Which matcher in the extraction chain produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// `{"sources": [...]}`
    SourcesArray,
    /// `{"url": "...", ...}`
    SingleRecord,
    /// `{"output": {"sources": [...]}}` or `{"output": {"url": ...}}`
    WrappedOutput,
    /// `http(s)://` runs scanned out of free text.
    BareUrls,
    /// No matcher produced anything.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub strategy: ExtractionStrategy,
    pub sources: Vec<Source>,
}

impl Extraction {
    fn nothing() -> Self {
        Self {
            strategy: ExtractionStrategy::Nothing,
            sources: Vec::new(),
        }
    }
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"https?://[^\s"']+"#).expect("valid url regex"))
}

/// Extracts source records from raw tool output.
///
/// Structured JSON shapes are tried first; when the payload is not JSON or
/// none of the shapes yields a record, the text is scanned for bare URLs.
/// Never fails: malformed input degrades to an empty result.
pub fn extract_tool_sources(content: &str) -> Extraction {
    if content.trim().is_empty() {
        return Extraction::nothing();
    }

    match serde_json::from_str::<Value>(content) {
        Ok(value) => {
            if let Some(extraction) = extract_structured(&value) {
                if !extraction.sources.is_empty() {
                    return extraction;
                }
                gallery_debug!(
                    "{:?} shape matched but yielded no sources; scanning text",
                    extraction.strategy
                );
            }
        }
        Err(err) => {
            gallery_debug!("tool output is not JSON ({}); scanning text", err);
        }
    }

    let sources = scan_bare_urls(content);
    if sources.is_empty() {
        Extraction::nothing()
    } else {
        Extraction {
            strategy: ExtractionStrategy::BareUrls,
            sources,
        }
    }
}

fn extract_structured(value: &Value) -> Option<Extraction> {
    let object = value.as_object()?;
    if let Some(extraction) = match_record_shape(object) {
        return Some(extraction);
    }
    let output = object.get("output")?.as_object()?;
    match_record_shape(output).map(|inner| Extraction {
        strategy: ExtractionStrategy::WrappedOutput,
        sources: inner.sources,
    })
}

fn match_record_shape(object: &Map<String, Value>) -> Option<Extraction> {
    if let Some(items) = object.get("sources").and_then(Value::as_array) {
        return Some(Extraction {
            strategy: ExtractionStrategy::SourcesArray,
            sources: items.iter().filter_map(read_source).collect(),
        });
    }
    if object.get("url").is_some_and(is_truthy) {
        let record = Value::Object(object.clone());
        return Some(Extraction {
            strategy: ExtractionStrategy::SingleRecord,
            sources: read_source(&record).into_iter().collect(),
        });
    }
    None
}

fn read_source(value: &Value) -> Option<Source> {
    match Source::deserialize(value) {
        Ok(source) => Some(source),
        Err(err) => {
            gallery_warn!("Skipping malformed source record: {}", err);
            None
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Pulls the URLs out of caller-supplied free text, keeping only the kinds
/// `kinds` allows.
///
/// YouTube player URLs are typed before image extensions here, the reverse
/// of tool output scanning. Titles are title-cased.
pub fn extract_text_sources(content: &str, kinds: KindFilter) -> Vec<Source> {
    scan_bare_urls(content)
        .into_iter()
        .filter_map(|source| {
            let kind = detect_kind(&source.url);
            if !kinds.allows(kind) {
                return None;
            }
            let title = title_case(&source.title);
            Some(Source::new(source.url, title, kind).with_description(TEXT_DESCRIPTION))
        })
        .collect()
}

fn scan_bare_urls(content: &str) -> Vec<Source> {
    let mut seen = HashSet::new();
    url_pattern()
        .find_iter(content)
        .filter_map(|found| {
            let url = clean_url(found.as_str().trim_end_matches('\\'));
            if url.is_empty() || !seen.insert(url.clone()) {
                return None;
            }
            let title = title_from_url(&url);
            let kind = classify_url(&url);
            Some(Source::new(url, title, kind))
        })
        .collect()
}

/// Last path segment with `-`/`_` turned into spaces, or `"Link"`.
pub fn title_from_url(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or_default();
    let title = segment.replace(['-', '_'], " ");
    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

/// Image extension first, then video host, else a plain link.
pub fn classify_url(url: &str) -> SourceKind {
    if has_image_extension(url) {
        SourceKind::Image
    } else if is_video_hosting_url(url) {
        SourceKind::Video
    } else {
        SourceKind::Link
    }
}
