/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    TogglePause,
    NextVoice,
    SelectVoice(String),
    Restart,
    Quit,
    None,
}

/// Map a key press to an event.
pub fn key_to_event(c: char) -> AppEvent {
    match c {
        ' ' | 'p' => AppEvent::TogglePause,
        'v' => AppEvent::NextVoice,
        'r' => AppEvent::Restart,
        'q' => AppEvent::Quit,
        _ => AppEvent::None,
    }
}
