/// Where playback is believed to be, in word indices and corpus offsets.
///
/// `last_char_offset` is `None` until the first word boundary of an utterance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub last_char_offset: Option<usize>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_started(&self) -> bool {
        self.last_char_offset.is_some()
    }
}
