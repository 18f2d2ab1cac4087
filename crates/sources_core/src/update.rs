use crate::{Effect, GalleryState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: GalleryState, msg: Msg) -> (GalleryState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { scope } => {
            let state = GalleryState::mounted(scope.clone());
            return (state, vec![Effect::LoadSources { scope }]);
        }
        Msg::SourcesLoaded { scope, sources } => {
            if &scope == state.scope() {
                state.replace_sources(sources);
            }
            Vec::new()
        }
        Msg::ToolOutputChanged(output) => {
            // Same payload and flag as last time: nothing to recompute.
            if !state.remember_payload(&output.content, output.is_success) {
                return (state, Vec::new());
            }
            if output.content.is_empty() || !output.is_success {
                return (state, Vec::new());
            }
            vec![Effect::ProcessToolOutput {
                scope: state.scope().clone(),
                content: output.content,
            }]
        }
        Msg::SourcesMerged {
            scope,
            sources,
            stats,
        } => {
            if &scope == state.scope() {
                state.replace_sources(sources);
                state.set_last_merge(stats);
            }
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.select(category);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
