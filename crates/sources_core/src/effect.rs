use crate::Scope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the stored collection for `scope`.
    LoadSources { scope: Scope },
    /// Extract sources from `content`, merge them into the stored collection
    /// for `scope` and persist the result.
    ProcessToolOutput { scope: Scope, content: String },
}
