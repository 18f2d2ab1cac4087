use std::collections::VecDeque;

use sources_core::{update, GalleryState, GalleryViewModel, Msg};
use sources_logging::gallery_debug;

use super::effects::EffectRunner;
use super::ui;

/// Drives the pure gallery state machine: queued messages are applied in
/// order, their effects executed, and a new frame rendered whenever the state
/// reports itself dirty.
pub struct GalleryApp {
    state: GalleryState,
    runner: EffectRunner,
    inbox: VecDeque<Msg>,
    frame: Option<String>,
    frames_rendered: usize,
}

impl GalleryApp {
    pub fn new(runner: EffectRunner) -> Self {
        Self {
            state: GalleryState::new(),
            runner,
            inbox: VecDeque::new(),
            frame: None,
            frames_rendered: 0,
        }
    }

    pub fn runner(&self) -> &EffectRunner {
        &self.runner
    }

    pub fn view(&self) -> GalleryViewModel {
        self.state.view()
    }

    /// Queues `msg` and processes everything pending, including the messages
    /// produced by executed effects.
    pub fn send(&mut self, msg: Msg) {
        self.inbox.push_back(msg);
        self.process_pending_messages();
    }

    /// Latest rendered frame, rendering the current view if none exists yet.
    pub fn frame(&self) -> String {
        match &self.frame {
            Some(frame) => frame.clone(),
            None => ui::render::render(&self.state.view()),
        }
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    fn process_pending_messages(&mut self) {
        while let Some(msg) = self.inbox.pop_front() {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        for effect in effects {
            gallery_debug!("Running effect {:?}", effect);
            let reply = self.runner.run(effect);
            self.inbox.push_back(reply);
        }

        if was_dirty {
            self.enqueue_render(&view);
        }
    }

    fn enqueue_render(&mut self, view: &GalleryViewModel) {
        self.frame = Some(ui::render::render(view));
        self.frames_rendered += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sources_core::{Category, Scope, ToolOutput};
    use sources_engine::EngineConfig;

    fn app() -> GalleryApp {
        sources_logging::initialize_for_tests();
        GalleryApp::new(EffectRunner::new(&EngineConfig::default()))
    }

    fn mounted(app: &mut GalleryApp) {
        app.send(Msg::Mounted {
            scope: Scope::from_path("/agents/t1"),
        });
    }

    #[test]
    fn empty_gallery_renders_empty_state() {
        let mut app = app();
        mounted(&mut app);

        assert!(app.frame().contains("No sources found."));
        assert!(app.frames_rendered() >= 1);
    }

    #[test]
    fn tool_output_flows_through_store_into_frame() {
        let mut app = app();
        mounted(&mut app);
        app.send(Msg::ToolOutputChanged(ToolOutput::finished(
            "Check https://x.com/img.png and https://youtu.be/dQw4w9WgXcQ",
        )));

        let view = app.view();
        assert_eq!(view.counts.total, 2);
        assert_eq!(view.counts.images, 1);
        assert_eq!(view.counts.videos, 1);
        assert!(app.frame().contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));

        let stored = app.runner().repository().load(&Scope::from_path("/agents/t1"));
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn remount_reseeds_from_storage_and_dedupes() {
        let mut app = app();
        mounted(&mut app);
        let payload = ToolOutput::finished(r#"{"sources":[{"url":"https://a.com","title":"A","type":"link"}]}"#);
        app.send(Msg::ToolOutputChanged(payload.clone()));

        mounted(&mut app);
        assert_eq!(app.view().counts.total, 1);

        app.send(Msg::ToolOutputChanged(payload));
        assert_eq!(app.view().counts.total, 1);
        assert_eq!(app.view().last_merge.map(|s| s.skipped), Some(1));
    }

    #[test]
    fn invalid_payload_keeps_stored_collection_visible() {
        let mut app = app();
        mounted(&mut app);
        app.send(Msg::ToolOutputChanged(ToolOutput::finished("https://a.com/doc")));
        app.send(Msg::ToolOutputChanged(ToolOutput::finished("{not valid")));

        assert_eq!(app.view().counts.total, 1);
        assert!(app.frame().contains("https://a.com/doc"));
    }

    #[test]
    fn script_url_from_tool_output_is_not_clickable() {
        let mut app = app();
        mounted(&mut app);
        app.send(Msg::ToolOutputChanged(ToolOutput::finished(
            r#"{"sources":[{"url":"javascript:alert(document.cookie)","title":"click me","type":"link"}]}"#,
        )));

        assert_eq!(app.view().counts.total, 1);
        let frame = app.frame();
        assert!(frame.contains("click me"));
        assert!(!frame.contains("href=\"javascript:"));
    }

    #[test]
    fn unchanged_state_does_not_render_again() {
        let mut app = app();
        mounted(&mut app);
        app.send(Msg::CategorySelected(Category::Links));
        let before = app.frames_rendered();

        app.send(Msg::CategorySelected(Category::Links));
        app.send(Msg::NoOp);

        assert_eq!(app.frames_rendered(), before);
    }
}
