//! Renderer trait definition for pluggable highlight backends
//!
//! The trait abstracts the terminal passage view and headless recorders, so
//! synchronization can be exercised without a screen.

use std::error::Error;
use std::fmt;

/// Errors that can occur during renderer operations
#[derive(Debug, Clone, PartialEq)]
pub enum RendererError {
    /// Failed to apply a style change
    RenderFailed(String),
    /// Invalid arguments provided
    InvalidArguments(String),
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenderFailed(msg) => write!(f, "Highlight rendering failed: {}", msg),
            Self::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for RendererError {}

impl RendererError {
    pub fn out_of_range(index: usize, word_count: usize) -> Self {
        Self::InvalidArguments(format!(
            "word index {} out of range for {} words",
            index, word_count
        ))
    }
}

/// Core trait for word highlight backends
///
/// Indices are word indices into the token sequence being read aloud.
pub trait Renderer {
    /// Mark the word as the one being spoken
    ///
    /// # Errors
    /// Returns `RendererError::InvalidArguments` if `index` is not a word of
    /// the rendered passage.
    fn highlight(&mut self, index: usize) -> Result<(), RendererError>;

    /// Remove the spoken-word style from the word
    fn unhighlight(&mut self, index: usize) -> Result<(), RendererError>;

    /// Bring the word into view, centred where the backend can
    fn scroll_into_view(&mut self, index: usize) -> Result<(), RendererError>;
}
