use super::event::{key_to_event, AppEvent};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::playback::{PlaybackController, PlaybackError};
use crate::speech::SpeechEngine;
use crate::ui::PassageRenderer;
use std::time::Duration;

pub struct App<E: SpeechEngine> {
    pub mode: AppMode,
    controller: PlaybackController<E, PassageRenderer>,
    source: String,
    message: Option<String>,
}

impl<E: SpeechEngine> App<E> {
    pub fn new(controller: PlaybackController<E, PassageRenderer>, source: impl Into<String>) -> Self {
        Self {
            mode: AppMode::Finished,
            controller,
            source: source.into(),
            message: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Start reading from the first word.
    pub fn start(&mut self) {
        match self.controller.start() {
            Ok(()) => {
                self.mode = AppMode::Playing;
                self.message = None;
            }
            Err(err) => self.report(err),
        }
    }

    pub fn handle_keypress(&mut self, c: char) {
        self.handle_event(key_to_event(c));
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TogglePause => match self.mode {
                AppMode::Playing | AppMode::Paused => {
                    self.controller.toggle_pause();
                    self.sync_mode();
                }
                AppMode::Finished => self.start(),
                AppMode::Quit => {}
            },
            AppEvent::NextVoice => self.next_voice(),
            AppEvent::SelectVoice(label) => self.select_voice(&label),
            AppEvent::Restart => self.start(),
            AppEvent::Quit => {
                self.controller.stop();
                self.mode = AppMode::Quit;
            }
            AppEvent::None => {}
        }
    }

    /// Advance the engine by `elapsed` and apply the queued highlight changes.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.mode == AppMode::Quit {
            return;
        }
        self.controller.pump(elapsed);
        if let Err(err) = self.controller.render_frame() {
            log::error!("failed to render highlight changes: {}", err);
            self.message = Some(err.to_string());
        }
        self.sync_mode();
    }

    /// Cycle to the voice after the current one in the offered list.
    pub fn next_voice(&mut self) {
        let options = self.controller.voice_options();
        if options.is_empty() {
            self.message = Some("No voices available".to_string());
            return;
        }

        let current = self
            .controller
            .current_voice()
            .and_then(|voice| options.iter().position(|option| option.name == voice.name));
        let next = current.map_or(0, |i| (i + 1) % options.len());
        self.select_voice(&options[next].label());
    }

    fn select_voice(&mut self, label: &str) {
        match self.controller.select_voice(label) {
            Ok(()) => {
                self.mode = AppMode::Playing;
                self.message = None;
            }
            Err(err) => self.report(err),
        }
    }

    fn sync_mode(&mut self) {
        if self.mode == AppMode::Quit {
            return;
        }
        self.mode = if self.controller.is_paused() {
            AppMode::Paused
        } else if self.controller.is_speaking() {
            AppMode::Playing
        } else {
            AppMode::Finished
        };
    }

    fn report(&mut self, err: PlaybackError) {
        log::warn!("{}", err);
        self.message = Some(err.to_string());
        self.mode = AppMode::Finished;
    }

    pub fn passage(&self) -> &PassageRenderer {
        self.controller.renderer()
    }

    pub fn controller(&self) -> &PlaybackController<E, PassageRenderer> {
        &self.controller
    }

    pub fn get_render_state(&self) -> RenderState {
        let state = self.controller.state();
        let total = self.controller.sequence().word_count();
        let read = if state.has_started() {
            (state.current_index + 1).min(total)
        } else {
            0
        };

        RenderState {
            mode: self.mode,
            progress: (read, total),
            voice: self.controller.current_voice().map(|voice| voice.name.clone()),
            rate: self.controller.utterance().rate,
            source: self.source.clone(),
            message: self.message.clone(),
        }
    }
}
