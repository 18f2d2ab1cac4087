use crate::{Source, SourceKind};

/// Gallery tab. Selection is the only transition; there is no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Links,
    Images,
    Videos,
}

impl Category {
    /// Tabs in display order.
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Links,
        Category::Images,
        Category::Videos,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Links => "Links",
            Category::Images => "Images",
            Category::Videos => "Videos",
        }
    }

    /// Stable identifier used in markup and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Links => "links",
            Category::Images => "images",
            Category::Videos => "videos",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(id.trim()))
    }

    /// The single non-`All` category a source is displayed under.
    pub fn of(source: &Source) -> Self {
        match source.kind {
            SourceKind::Image => Category::Images,
            SourceKind::Video => Category::Videos,
            SourceKind::Link if source.is_video_like_link() => Category::Videos,
            SourceKind::Link => Category::Links,
        }
    }

    pub fn includes(self, source: &Source) -> bool {
        self == Category::All || Category::of(source) == self
    }

    pub fn filter(self, sources: &[Source]) -> Vec<&Source> {
        sources.iter().filter(|s| self.includes(s)).collect()
    }
}

/// Per-tab counts, always recomputed from the full collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    pub total: usize,
    pub links: usize,
    pub images: usize,
    pub videos: usize,
}

impl CategoryCounts {
    pub fn tally(sources: &[Source]) -> Self {
        let mut counts = Self {
            total: sources.len(),
            ..Self::default()
        };
        for source in sources {
            match Category::of(source) {
                Category::Links => counts.links += 1,
                Category::Images => counts.images += 1,
                Category::Videos => counts.videos += 1,
                Category::All => {}
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::All => self.total,
            Category::Links => self.links,
            Category::Images => self.images,
            Category::Videos => self.videos,
        }
    }
}
