pub mod controller;
pub mod voice;

use crate::rendering::RendererError;
use crate::speech::EngineError;
use thiserror::Error;

pub use controller::PlaybackController;
pub use voice::{parse_label, voice_options, VoiceOption};

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Speech engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Renderer error: {0}")]
    Renderer(#[from] RendererError),

    #[error("Invalid voice label: {0}")]
    InvalidVoiceLabel(String),
}
