use crate::app::mode::AppMode;

/// Render state for the status line
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    /// Words read so far and total words.
    pub progress: (usize, usize),
    pub voice: Option<String>,
    pub rate: f32,
    pub source: String,
    pub message: Option<String>,
}

impl RenderState {
    /// Create an empty render state for when nothing is loaded
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            progress: (0, 0),
            voice: None,
            rate: 1.0,
            source: String::new(),
            message: None,
        }
    }

    pub fn voice_label(&self) -> &str {
        self.voice.as_deref().unwrap_or("default voice")
    }

    pub fn percent(&self) -> u16 {
        let (read, total) = self.progress;
        if total == 0 {
            return 0;
        }
        u16::try_from(read.min(total) * 100 / total).unwrap_or(100)
    }
}
