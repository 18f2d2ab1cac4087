use crate::{Category, CategoryCounts, MergeStats, Scope};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryViewModel {
    pub scope: Scope,
    pub active: Category,
    pub tabs: Vec<TabView>,
    /// Sources visible under the active tab, in collection order.
    pub cards: Vec<SourceCardView>,
    pub counts: CategoryCounts,
    pub last_merge: Option<MergeStats>,
}

impl GalleryViewModel {
    pub fn is_empty(&self) -> bool {
        self.counts.total == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCardView {
    pub url: String,
    pub title: String,
    pub icon: SourceIcon,
    /// False when the URL is not http(s); such cards render without links or previews.
    pub linkable: bool,
    pub description: Option<String>,
    pub preview: Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceIcon {
    Globe,
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    None,
    Image,
    Embed { video_id: String },
    /// Video host URL without an extractable id.
    NotEmbeddable,
}
