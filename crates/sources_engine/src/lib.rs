//! Sources engine: extraction, harvesting and scoped persistence.
mod config;
mod describe;
mod extract;
mod filename;
mod harvest;
mod repository;
mod store;

pub use config::{EngineConfig, StorageConfig, TimestampFn};
pub use describe::{describe_source, DescribeError, SourceDraft};
pub use extract::{
    classify_url, extract_text_sources, extract_tool_sources, title_from_url, Extraction,
    ExtractionStrategy,
};
pub use filename::key_filename;
pub use harvest::{KindFilter, PageHarvester, DEFAULT_MAX_SOURCES};
pub use repository::SourceRepository;
pub use store::{ensure_store_dir, DirectoryStore, MemoryStore, SourceStore, StoreError};
