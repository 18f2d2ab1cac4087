use std::collections::HashSet;

use crate::Source;

/// How many incoming records were appended and how many were already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    pub added: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    pub sources: Vec<Source>,
    pub stats: MergeStats,
}

/// Appends incoming records whose URL is not yet present.
///
/// The first record seen for a URL wins; later duplicates are dropped, both
/// against the existing collection and within `incoming` itself. Duplicates
/// already present in `existing` are collapsed as well.
pub fn merge_sources(existing: Vec<Source>, incoming: Vec<Source>) -> MergeOutcome {
    let mut seen: HashSet<String> = HashSet::with_capacity(existing.len() + incoming.len());
    let mut sources = Vec::with_capacity(existing.len() + incoming.len());

    for source in existing {
        if seen.insert(source.url.clone()) {
            sources.push(source);
        }
    }

    let mut stats = MergeStats::default();
    for source in incoming {
        if seen.insert(source.url.clone()) {
            sources.push(source);
            stats.added += 1;
        } else {
            stats.skipped += 1;
        }
    }

    MergeOutcome { sources, stats }
}
