//! Sources core: domain records, filtering and the pure gallery state machine.
mod category;
mod effect;
mod merge;
mod msg;
mod scope;
mod source;
mod state;
mod update;
mod video;
mod view_model;

pub use category::{Category, CategoryCounts};
pub use effect::Effect;
pub use merge::{merge_sources, MergeOutcome, MergeStats};
pub use msg::{Msg, ToolOutput};
pub use scope::{Scope, DEFAULT_BASE_KEY};
pub use source::{
    clean_url, has_image_extension, is_video_hosting_url, is_web_url, Source, SourceKind, IMAGE_EXTENSIONS,
};
pub use state::GalleryState;
pub use update::update;
pub use video::{embed_url, youtube_video_id};
pub use view_model::{GalleryViewModel, Preview, SourceCardView, SourceIcon, TabView};
