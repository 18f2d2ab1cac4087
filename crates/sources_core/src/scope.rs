use std::fmt;

/// Base storage key used when no other key is configured.
pub const DEFAULT_BASE_KEY: &str = "suna_sources_data";

const AGENTS_SEGMENT: &str = "/agents/";

/// Partition of the persisted collections: one per conversation, plus a
/// global fallback when the navigation path names no conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Global,
    Conversation(String),
}

impl Scope {
    /// Resolves the scope from a navigation path such as `/agents/<id>/...`.
    ///
    /// Query strings and fragments are ignored; full URLs are accepted too.
    pub fn from_path(path: &str) -> Self {
        let Some(start) = path.find(AGENTS_SEGMENT) else {
            return Scope::Global;
        };
        let rest = &path[start + AGENTS_SEGMENT.len()..];
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let id = &rest[..end];
        if id.is_empty() {
            Scope::Global
        } else {
            Scope::Conversation(id.to_string())
        }
    }

    /// `"<base>_<conversation-id>"`, or `base` alone for the global scope.
    pub fn storage_key(&self, base: &str) -> String {
        match self {
            Scope::Global => base.to_string(),
            Scope::Conversation(id) => format!("{base}_{id}"),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Conversation(id) => write!(f, "conversation {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Scope, DEFAULT_BASE_KEY};

    #[test]
    fn conversation_id_comes_from_agents_segment() {
        assert_eq!(
            Scope::from_path("/agents/thread-42"),
            Scope::Conversation("thread-42".into())
        );
        assert_eq!(
            Scope::from_path("https://app.example.com/agents/abc/files?tab=1"),
            Scope::Conversation("abc".into())
        );
        assert_eq!(
            Scope::from_path("/agents/abc?x=1#top"),
            Scope::Conversation("abc".into())
        );
    }

    #[test]
    fn paths_without_conversation_fall_back_to_global() {
        assert_eq!(Scope::from_path("/"), Scope::Global);
        assert_eq!(Scope::from_path("/agents/"), Scope::Global);
        assert_eq!(Scope::from_path("/dashboard"), Scope::Global);
    }

    #[test]
    fn storage_keys_are_prefixed_by_base() {
        assert_eq!(Scope::Global.storage_key(DEFAULT_BASE_KEY), "suna_sources_data");
        assert_eq!(
            Scope::Conversation("t1".into()).storage_key(DEFAULT_BASE_KEY),
            "suna_sources_data_t1"
        );
    }
}
