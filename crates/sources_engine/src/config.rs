use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use sources_core::DEFAULT_BASE_KEY;

use crate::harvest::DEFAULT_MAX_SOURCES;

/// Produces the timestamp stamped on described and harvested sources.
pub type TimestampFn = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Memory,
    Directory(PathBuf),
}

#[derive(Clone)]
pub struct EngineConfig {
    /// Prefix of every storage key.
    pub base_key: String,
    pub storage: StorageConfig,
    pub timestamp_utc: TimestampFn,
    pub max_harvested_sources: usize,
}

impl EngineConfig {
    pub fn with_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig::Directory(dir.into()),
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_key: DEFAULT_BASE_KEY.to_string(),
            storage: StorageConfig::Memory,
            timestamp_utc: Arc::new(|| Utc::now().to_rfc3339()),
            max_harvested_sources: DEFAULT_MAX_SOURCES,
        }
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("base_key", &self.base_key)
            .field("storage", &self.storage)
            .field("max_harvested_sources", &self.max_harvested_sources)
            .finish_non_exhaustive()
    }
}
