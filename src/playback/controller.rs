use super::voice::{parse_label, voice_options, VoiceOption};
use super::PlaybackError;
use crate::config::{PlaybackConfig, ResyncConfig};
use crate::reading::{build_corpus, tokenize, Corpus, TokenSequence};
use crate::rendering::{HighlightController, Renderer, RendererError};
use crate::speech::{EngineEvent, SpeechEngine, Utterance, Voice};
use crate::sync::{PlaybackState, Resynchronizer, Transition};
use std::time::Duration;

/// Drives one read-along session: engine events in, highlight changes out.
///
/// The token sequence and corpus are fixed for the controller's lifetime; the
/// playback state is reset whenever the utterance starts over or ends.
pub struct PlaybackController<E: SpeechEngine, R: Renderer> {
    engine: E,
    sequence: TokenSequence,
    corpus: Corpus,
    utterance: Utterance,
    resync: Resynchronizer,
    highlighter: HighlightController<R>,
    voice_lang: String,
}

impl<E: SpeechEngine, R: Renderer> PlaybackController<E, R> {
    pub fn new<S: AsRef<str>>(
        engine: E,
        renderer: R,
        fragments: &[S],
        playback: &PlaybackConfig,
        sync: ResyncConfig,
    ) -> Self {
        Self::with_sequence(engine, renderer, tokenize(fragments), playback, sync)
    }

    /// Like [`PlaybackController::new`] for text that is already tokenized,
    /// e.g. when the renderer was built from the same sequence.
    pub fn with_sequence(
        engine: E,
        renderer: R,
        sequence: TokenSequence,
        playback: &PlaybackConfig,
        sync: ResyncConfig,
    ) -> Self {
        let corpus = build_corpus(&sequence);

        let mut utterance = Utterance::new(corpus.as_str());
        utterance.rate = playback.rate;
        utterance.voice = playback
            .voice
            .as_deref()
            .and_then(|name| find_voice(&engine.voices(), name));

        log::info!(
            "prepared {} words ({} chars) for playback",
            sequence.word_count(),
            corpus.char_len()
        );

        Self {
            engine,
            sequence,
            corpus,
            utterance,
            resync: Resynchronizer::new(sync),
            highlighter: HighlightController::new(renderer),
            voice_lang: playback.voice_lang.clone(),
        }
    }

    /// Start speaking from the beginning.
    pub fn start(&mut self) -> Result<(), PlaybackError> {
        self.reset();
        self.engine.speak(&self.utterance)?;
        log::info!("playback started");
        Ok(())
    }

    /// Advance the engine clock and handle every event it releases.
    pub fn pump(&mut self, elapsed: Duration) {
        for event in self.engine.poll(elapsed) {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Boundary(boundary) => {
                let transition = self
                    .resync
                    .on_boundary(&boundary, &self.corpus, &self.sequence);
                if transition == Transition::Ignore {
                    log::debug!(
                        "ignoring {:?} boundary at {}",
                        boundary.kind,
                        boundary.char_offset
                    );
                }
                self.highlighter.apply(&transition);
            }
            EngineEvent::Error(err) => {
                log::warn!("speech engine error: {}", err);
            }
            EngineEvent::End => {
                log::info!("playback finished");
                self.reset();
            }
        }
    }

    /// Resume if the engine is paused.
    pub fn play(&mut self) {
        if self.engine.is_paused() {
            self.engine.resume();
        }
    }

    /// Pause if the engine is speaking.
    pub fn pause(&mut self) {
        if self.engine.is_speaking() {
            self.engine.pause();
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.engine.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Cancel engine playback and clear all synchronization state.
    pub fn stop(&mut self) {
        self.engine.cancel();
        self.reset();
    }

    /// Clear the playback state and queue an unhighlight for every word.
    pub fn reset(&mut self) {
        self.resync.reset();
        self.highlighter.unhighlight_all(self.sequence.word_count());
    }

    pub fn voice_options(&self) -> Vec<VoiceOption> {
        voice_options(&self.engine.voices(), &self.voice_lang)
    }

    /// Switch voices mid-playback.
    ///
    /// The engine cannot seek, so the same utterance restarts from its first
    /// word. A name the engine does not know falls back to its default voice.
    pub fn select_voice(&mut self, label: &str) -> Result<(), PlaybackError> {
        let option =
            parse_label(label).ok_or_else(|| PlaybackError::InvalidVoiceLabel(label.to_string()))?;
        self.utterance.voice = find_voice(&self.engine.voices(), &option.name);
        if self.utterance.voice.is_none() {
            log::warn!("voice {:?} not offered, using engine default", option.name);
        }

        self.engine.cancel();
        self.reset();
        self.engine.speak(&self.utterance)?;
        log::info!("restarted playback with voice {:?}", option.name);
        Ok(())
    }

    /// Apply the highlight changes queued since the last frame.
    pub fn render_frame(&mut self) -> Result<usize, RendererError> {
        self.highlighter.flush()
    }

    pub fn state(&self) -> PlaybackState {
        self.resync.state()
    }

    pub fn sequence(&self) -> &TokenSequence {
        &self.sequence
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn utterance(&self) -> &Utterance {
        &self.utterance
    }

    pub fn current_voice(&self) -> Option<&Voice> {
        self.utterance.voice.as_ref()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        self.highlighter.renderer()
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        self.highlighter.renderer_mut()
    }

    pub fn is_speaking(&self) -> bool {
        self.engine.is_speaking()
    }

    pub fn is_paused(&self) -> bool {
        self.engine.is_paused()
    }
}

fn find_voice(voices: &[Voice], name: &str) -> Option<Voice> {
    voices.iter().find(|voice| voice.name == name).cloned()
}
