//! Speech engine contract
//!
//! The engine is a black box: it speaks an utterance and reports progress only
//! as char offsets into the utterance text. Events are collected by polling so
//! the caller stays on one thread and handles each event to completion.

pub mod simulated;

use std::time::Duration;
use thiserror::Error;

pub use simulated::SimulatedEngine;

/// A voice the engine can speak with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// The text plus synthesis parameters handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    /// `None` lets the engine pick its default voice.
    pub voice: Option<Voice>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 1.0,
            voice: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    Word,
    Sentence,
}

/// Progress report: speech has reached `char_offset` in the utterance text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEvent {
    pub kind: BoundaryKind,
    pub char_offset: usize,
}

impl BoundaryEvent {
    pub fn word(char_offset: usize) -> Self {
        Self {
            kind: BoundaryKind::Word,
            char_offset,
        }
    }

    pub fn sentence(char_offset: usize) -> Self {
        Self {
            kind: BoundaryKind::Sentence,
            char_offset,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Unsupported speech rate: {0}")]
    UnsupportedRate(f32),

    #[error("Voice not available: {0}")]
    VoiceUnavailable(String),

    #[error("Nothing to speak")]
    EmptyUtterance,

    #[error("Speech interrupted: {0}")]
    Interrupted(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Boundary(BoundaryEvent),
    Error(EngineError),
    End,
}

/// Platform speech engine capability
pub trait SpeechEngine {
    /// Start speaking. Replaces whatever was queued.
    fn speak(&mut self, utterance: &Utterance) -> Result<(), EngineError>;

    fn pause(&mut self);

    fn resume(&mut self);

    /// Stop playback immediately. No `End` event follows.
    fn cancel(&mut self);

    /// True while an utterance is active, paused or not.
    fn is_speaking(&self) -> bool;

    fn is_paused(&self) -> bool;

    fn voices(&self) -> Vec<Voice>;

    /// Advance the engine clock by `elapsed` and collect the events now due,
    /// in delivery order.
    fn poll(&mut self, elapsed: Duration) -> Vec<EngineEvent>;
}
