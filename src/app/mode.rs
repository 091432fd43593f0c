#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Playing,
    Paused,
    /// The utterance ended or was never started; the text stays on screen.
    Finished,
    Quit,
}

impl AppMode {
    pub fn label(&self) -> &'static str {
        match self {
            AppMode::Playing => "▶ Playing",
            AppMode::Paused => "⏸ Paused",
            AppMode::Finished => "■ Finished",
            AppMode::Quit => "Quitting",
        }
    }
}
