use serde::Deserialize;
use serde_json::Value;
use sources_core::{merge_sources, MergeOutcome, Scope, Source};
use sources_logging::{gallery_debug, gallery_error, gallery_info, gallery_warn};

use crate::config::{EngineConfig, StorageConfig, TimestampFn};
use crate::describe::{describe_source, DescribeError, SourceDraft};
use crate::extract::{extract_text_sources, extract_tool_sources};
use crate::harvest::{KindFilter, PageHarvester};
use crate::store::{DirectoryStore, MemoryStore, SourceStore};

/// Scoped access to persisted source collections.
///
/// Every failure on the storage side is logged and degrades to an empty
/// collection (reads) or a skipped write; callers never see store errors.
pub struct SourceRepository {
    store: Box<dyn SourceStore>,
    base_key: String,
    timestamp_utc: TimestampFn,
    max_harvested_sources: usize,
}

impl SourceRepository {
    pub fn new(config: &EngineConfig) -> Self {
        let store: Box<dyn SourceStore> = match &config.storage {
            StorageConfig::Memory => Box::new(MemoryStore::new()),
            StorageConfig::Directory(dir) => Box::new(DirectoryStore::new(dir.clone())),
        };
        Self::with_store(store, config)
    }

    pub fn with_store(store: Box<dyn SourceStore>, config: &EngineConfig) -> Self {
        Self {
            store,
            base_key: config.base_key.clone(),
            timestamp_utc: config.timestamp_utc.clone(),
            max_harvested_sources: config.max_harvested_sources,
        }
    }

    pub fn storage_key(&self, scope: &Scope) -> String {
        scope.storage_key(&self.base_key)
    }

    /// Stored collection for `scope`; missing, unreadable or corrupt data
    /// yields an empty collection.
    pub fn load(&self, scope: &Scope) -> Vec<Source> {
        let key = self.storage_key(scope);
        let text = match self.store.get(&key) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                gallery_warn!("Failed to read sources for key {}: {}", key, err);
                return Vec::new();
            }
        };
        parse_collection(&key, &text)
    }

    /// Full overwrite of the stored collection for `scope`.
    pub fn save(&self, scope: &Scope, sources: &[Source]) {
        let key = self.storage_key(scope);
        let text = match serde_json::to_string(sources) {
            Ok(text) => text,
            Err(err) => {
                gallery_error!("Failed to serialize sources for key {}: {}", key, err);
                return;
            }
        };
        if let Err(err) = self.store.set(&key, &text) {
            gallery_error!("Failed to write sources for key {}: {}", key, err);
        }
    }

    /// Extracts sources from tool output and merges them into the stored
    /// collection. With nothing extracted the stored collection is returned
    /// untouched and nothing is written.
    pub fn process_tool_output(&self, scope: &Scope, content: &str) -> MergeOutcome {
        let extraction = extract_tool_sources(content);
        gallery_debug!(
            "Extracted {} source(s) via {:?} for {}",
            extraction.sources.len(),
            extraction.strategy,
            scope
        );
        self.merge_and_save(scope, extraction.sources)
    }

    /// Describes one source and merges it into the stored collection.
    pub fn add_source(
        &self,
        scope: &Scope,
        draft: SourceDraft,
    ) -> Result<MergeOutcome, DescribeError> {
        let source = describe_source(draft, (self.timestamp_utc)())?;
        Ok(self.merge_and_save(scope, vec![source]))
    }

    /// Scans free text for URLs of the allowed kinds and merges them.
    pub fn extract_from_text(
        &self,
        scope: &Scope,
        content: &str,
        kinds: KindFilter,
    ) -> MergeOutcome {
        let timestamp = (self.timestamp_utc)();
        let sources: Vec<Source> = extract_text_sources(content, kinds)
            .into_iter()
            .map(|source| source.with_timestamp(timestamp.clone()))
            .collect();
        gallery_debug!("Text scan for {} found {} source(s)", scope, sources.len());
        self.merge_and_save(scope, sources)
    }

    /// Harvests sources from an already obtained HTML page and merges them.
    pub fn harvest_page(
        &self,
        scope: &Scope,
        html: &str,
        page_url: Option<&str>,
        kinds: KindFilter,
    ) -> MergeOutcome {
        let harvester = PageHarvester::with_limits(kinds, self.max_harvested_sources);
        let timestamp = (self.timestamp_utc)();
        let sources = harvester
            .harvest(html, page_url)
            .into_iter()
            .map(|source| source.with_timestamp(timestamp.clone()))
            .collect();
        self.merge_and_save(scope, sources)
    }

    fn merge_and_save(&self, scope: &Scope, incoming: Vec<Source>) -> MergeOutcome {
        let existing = self.load(scope);
        if incoming.is_empty() {
            return MergeOutcome {
                sources: existing,
                stats: Default::default(),
            };
        }

        let outcome = merge_sources(existing, incoming);
        self.save(scope, &outcome.sources);
        gallery_info!(
            "Merged sources for {}: added={} skipped={} total={}",
            scope,
            outcome.stats.added,
            outcome.stats.skipped,
            outcome.sources.len()
        );
        outcome
    }
}

fn parse_collection(key: &str, text: &str) -> Vec<Source> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            gallery_warn!("Ignoring corrupt sources for key {}: {}", key, err);
            return Vec::new();
        }
    };
    let Value::Array(items) = value else {
        gallery_warn!("Ignoring non-array sources for key {}", key);
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match Source::deserialize(item) {
            Ok(source) => Some(source),
            Err(err) => {
                gallery_warn!("Skipping stored source for key {}: {}", key, err);
                None
            }
        })
        .collect()
}
