use crate::{Category, MergeStats, Scope, Source};

/// Tool output as handed over by the surrounding conversation view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolOutput {
    pub content: String,
    pub is_success: bool,
    pub is_streaming: bool,
}

impl ToolOutput {
    pub fn finished(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_success: true,
            is_streaming: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The gallery was (re)mounted for a conversation.
    Mounted { scope: Scope },
    /// Stored collection read back for a scope.
    SourcesLoaded { scope: Scope, sources: Vec<Source> },
    /// The tool output payload or its flags changed.
    ToolOutputChanged(ToolOutput),
    /// Result of merging extracted sources into the stored collection.
    SourcesMerged {
        scope: Scope,
        sources: Vec<Source>,
        stats: MergeStats,
    },
    /// User picked a tab.
    CategorySelected(Category),
    NoOp,
}
