use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use sources_core::{Source, SourceKind};
use url::Url;

pub const DEFAULT_MAX_SOURCES: usize = 5_000;
const MAX_TITLE_CHARS: usize = 100;
const UNKNOWN_PAGE: &str = "Unknown Page";
const EMBED_MARKER: &str = "youtube.com/embed/";

/// Which source kinds a harvest keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindFilter {
    pub links: bool,
    pub images: bool,
    pub videos: bool,
}

impl KindFilter {
    pub fn all() -> Self {
        Self {
            links: true,
            images: true,
            videos: true,
        }
    }

    /// An empty list means every kind.
    pub fn only(kinds: &[SourceKind]) -> Self {
        if kinds.is_empty() {
            return Self::all();
        }
        Self {
            links: kinds.contains(&SourceKind::Link),
            images: kinds.contains(&SourceKind::Image),
            videos: kinds.contains(&SourceKind::Video),
        }
    }

    pub fn allows(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Link => self.links,
            SourceKind::Image => self.images,
            SourceKind::Video => self.videos,
        }
    }
}

impl Default for KindFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Collects links, images and embedded videos from an HTML page that has
/// already been obtained by the caller, in document order.
pub struct PageHarvester {
    kinds: KindFilter,
    max_sources: usize,
}

impl PageHarvester {
    pub fn new() -> Self {
        Self::with_limits(KindFilter::all(), DEFAULT_MAX_SOURCES)
    }

    pub fn with_limits(kinds: KindFilter, max_sources: usize) -> Self {
        Self { kinds, max_sources }
    }

    pub fn harvest(&self, html: &str, page_url: Option<&str>) -> Vec<Source> {
        let document = Html::parse_document(html);
        let page_url = page_url.and_then(|u| Url::parse(u).ok());
        let page_title = page_title(&document).unwrap_or_else(|| UNKNOWN_PAGE.to_string());
        let mut ctx = HarvestContext {
            sources: Vec::new(),
            page_url,
            page_title,
            kinds: self.kinds,
            max_sources: self.max_sources,
        };

        for child in document.root_element().children() {
            self.visit_node(child, &mut ctx);
        }

        ctx.sources
    }

    fn visit_node(&self, node: NodeRef<'_, Node>, ctx: &mut HarvestContext) {
        if ctx.is_full() {
            return;
        }
        match node.value() {
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.visit_element(element, ctx);
                }
            }
            _ => {
                for child in node.children() {
                    self.visit_node(child, ctx);
                }
            }
        }
    }

    fn visit_element(&self, element: ElementRef, ctx: &mut HarvestContext) {
        let tag = element.value().name().to_ascii_lowercase();
        match tag.as_str() {
            "a" => {
                handle_anchor(element, ctx);
                self.visit_children(element, ctx);
            }
            "img" => handle_image(element, ctx),
            "iframe" => handle_iframe(element, ctx),
            "script" | "style" | "noscript" | "template" => {}
            _ => self.visit_children(element, ctx),
        }
    }

    fn visit_children(&self, element: ElementRef, ctx: &mut HarvestContext) {
        for child in element.children() {
            self.visit_node(child, ctx);
        }
    }
}

impl Default for PageHarvester {
    fn default() -> Self {
        Self::new()
    }
}

struct HarvestContext {
    sources: Vec<Source>,
    page_url: Option<Url>,
    page_title: String,
    kinds: KindFilter,
    max_sources: usize,
}

impl HarvestContext {
    fn is_full(&self) -> bool {
        self.sources.len() >= self.max_sources
    }

    fn push(&mut self, source: Source) {
        if self.is_full() || !self.kinds.allows(source.kind) {
            return;
        }
        self.sources.push(source);
    }
}

/// Only absolute http(s) anchors count; relative navigation links are skipped.
fn handle_anchor(element: ElementRef, ctx: &mut HarvestContext) {
    let Some(href) = element.value().attr("href").map(str::trim) else {
        return;
    };
    let Ok(url) = Url::parse(href) else {
        return;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return;
    }
    let text = collapse_whitespace(&element.text().collect::<String>());
    let title = if text.is_empty() { href.to_string() } else { text };
    let description = format!("Found on {}", ctx.page_title);
    ctx.push(
        Source::new(href, truncate_chars(&title, MAX_TITLE_CHARS), SourceKind::Link)
            .with_description(description),
    );
}

fn handle_image(element: ElementRef, ctx: &mut HarvestContext) {
    let Some(src) = element.value().attr("src").map(str::trim) else {
        return;
    };
    let Some(url) = resolve(src, ctx.page_url.as_ref()) else {
        return;
    };
    let alt = element
        .value()
        .attr("alt")
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .unwrap_or("Image");
    let description = format!("Image from {}", ctx.page_title);
    ctx.push(
        Source::new(url, truncate_chars(alt, MAX_TITLE_CHARS), SourceKind::Image)
            .with_description(description),
    );
}

fn handle_iframe(element: ElementRef, ctx: &mut HarvestContext) {
    let Some(src) = element.value().attr("src").map(str::trim) else {
        return;
    };
    if !src.contains(EMBED_MARKER) {
        return;
    }
    let Some(url) = resolve(src, ctx.page_url.as_ref()) else {
        return;
    };
    let title = element
        .value()
        .attr("title")
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or("YouTube Video");
    let description = format!("Video embedded on {}", ctx.page_title);
    ctx.push(Source::new(url, title, SourceKind::Video).with_description(description));
}

fn resolve(reference: &str, base: Option<&Url>) -> Option<String> {
    if reference.is_empty() || reference.starts_with("data:") {
        return None;
    }
    if let Ok(url) = Url::parse(reference) {
        return Some(url.into());
    }
    match base {
        Some(base) => base.join(reference).ok().map(Into::into),
        // Protocol-relative references still name a host without a base.
        None if reference.starts_with("//") => Some(format!("https:{reference}")),
        None => None,
    }
}

fn page_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|t| collapse_whitespace(&t.text().collect::<String>()))
        .filter(|t| !t.is_empty())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
