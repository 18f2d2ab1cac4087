use crate::view_model::{GalleryViewModel, Preview, SourceCardView, SourceIcon, TabView};
use crate::{is_web_url, youtube_video_id, Category, CategoryCounts, MergeStats, Scope, Source, SourceKind};

/// Identity of a processed tool payload; re-delivery of the same key is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PayloadKey {
    content: String,
    is_success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    scope: Scope,
    sources: Vec<Source>,
    active: Category,
    last_payload: Option<PayloadKey>,
    last_merge: Option<MergeStats>,
    dirty: bool,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state for a newly mounted gallery.
    pub fn mounted(scope: Scope) -> Self {
        Self {
            scope,
            dirty: true,
            ..Self::default()
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn active_category(&self) -> Category {
        self.active
    }

    pub fn view(&self) -> GalleryViewModel {
        let counts = CategoryCounts::tally(&self.sources);
        let tabs = Category::ALL
            .into_iter()
            .map(|category| TabView {
                category,
                label: category.label(),
                count: counts.get(category),
                active: category == self.active,
            })
            .collect();
        let cards = self
            .active
            .filter(&self.sources)
            .into_iter()
            .map(card_for)
            .collect();

        GalleryViewModel {
            scope: self.scope.clone(),
            active: self.active,
            tabs,
            cards,
            counts,
            last_merge: self.last_merge,
        }
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn replace_sources(&mut self, sources: Vec<Source>) {
        if self.sources != sources {
            self.sources = sources;
            self.dirty = true;
        }
    }

    pub(crate) fn set_last_merge(&mut self, stats: MergeStats) {
        self.last_merge = Some(stats);
        self.dirty = true;
    }

    pub(crate) fn select(&mut self, category: Category) {
        if self.active != category {
            self.active = category;
            self.dirty = true;
        }
    }

    /// Records the payload; returns false when it was already seen.
    pub(crate) fn remember_payload(&mut self, content: &str, is_success: bool) -> bool {
        let key = PayloadKey {
            content: content.to_string(),
            is_success,
        };
        if self.last_payload.as_ref() == Some(&key) {
            return false;
        }
        self.last_payload = Some(key);
        true
    }
}

fn card_for(source: &Source) -> SourceCardView {
    let video = source.is_effectively_video();
    let icon = if video {
        SourceIcon::Video
    } else if source.kind == SourceKind::Image {
        SourceIcon::Image
    } else {
        SourceIcon::Globe
    };
    let linkable = is_web_url(&source.url);
    let preview = if !linkable {
        Preview::None
    } else if video {
        match youtube_video_id(&source.url) {
            Some(video_id) => Preview::Embed { video_id },
            None => Preview::NotEmbeddable,
        }
    } else if source.kind == SourceKind::Image {
        Preview::Image
    } else {
        Preview::None
    };

    SourceCardView {
        url: source.url.clone(),
        title: source.title.clone(),
        icon,
        linkable,
        description: source.description.clone().filter(|d| !d.is_empty()),
        preview,
    }
}
