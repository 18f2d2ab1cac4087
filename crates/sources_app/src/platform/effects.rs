use sources_core::{Effect, Msg};
use sources_engine::{EngineConfig, SourceRepository};
use sources_logging::gallery_info;

/// Executes core effects against the repository and reports back as messages.
pub struct EffectRunner {
    repository: SourceRepository,
}

impl EffectRunner {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            repository: SourceRepository::new(config),
        }
    }

    pub fn repository(&self) -> &SourceRepository {
        &self.repository
    }

    pub fn run(&self, effect: Effect) -> Msg {
        match effect {
            Effect::LoadSources { scope } => {
                let sources = self.repository.load(&scope);
                gallery_info!("Loaded {} source(s) for {}", sources.len(), scope);
                Msg::SourcesLoaded { scope, sources }
            }
            Effect::ProcessToolOutput { scope, content } => {
                gallery_info!(
                    "ProcessToolOutput scope={} content_len={}",
                    scope,
                    content.len()
                );
                let outcome = self.repository.process_tool_output(&scope, &content);
                Msg::SourcesMerged {
                    scope,
                    sources: outcome.sources,
                    stats: outcome.stats,
                }
            }
        }
    }
}
