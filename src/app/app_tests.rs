use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, RenderState};
use crate::config::{PlaybackConfig, ResyncConfig};
use crate::playback::PlaybackController;
use crate::reading::tokenize;
use crate::speech::SimulatedEngine;
use crate::ui::PassageRenderer;
use std::time::Duration;

fn app(text: &str) -> App<SimulatedEngine> {
    let sequence = tokenize(&[text]);
    let controller = PlaybackController::with_sequence(
        SimulatedEngine::default(),
        PassageRenderer::new(&sequence),
        sequence,
        &PlaybackConfig::default(),
        ResyncConfig::default(),
    );
    App::new(controller, "test.txt")
}

#[test]
fn test_app_starts_finished_until_started() {
    let app = app("one two three");
    assert_eq!(app.mode(), AppMode::Finished);
    let state = app.get_render_state();
    assert_eq!(state.progress, (0, 3));
    assert_eq!(state.source, "test.txt");
}

#[test]
fn test_app_start_highlights_first_word() {
    let mut app = app("one two three");
    app.start();
    app.tick(Duration::ZERO);
    assert_eq!(app.mode(), AppMode::Playing);
    assert!(app.passage().is_highlighted(0));
    assert_eq!(app.passage().focus(), Some(0));
    assert_eq!(app.get_render_state().progress, (1, 3));
}

#[test]
fn test_app_toggle_pause() {
    let mut app = app("one two three");
    app.start();
    app.handle_keypress(' ');
    assert_eq!(app.mode(), AppMode::Paused);
    app.handle_keypress(' ');
    assert_eq!(app.mode(), AppMode::Playing);
}

#[test]
fn test_app_finishes_and_clears_highlight() {
    let mut app = app("one two three");
    app.start();
    app.tick(Duration::from_secs(60));
    assert_eq!(app.mode(), AppMode::Finished);
    assert!(!app.passage().is_highlighted(0));
    assert_eq!(app.get_render_state().progress, (0, 3));
}

#[test]
fn test_app_space_when_finished_restarts() {
    let mut app = app("one two three");
    app.handle_event(AppEvent::TogglePause);
    assert_eq!(app.mode(), AppMode::Playing);
}

#[test]
fn test_app_next_voice_cycles() {
    let mut app = app("one two three");
    app.start();
    app.handle_event(AppEvent::NextVoice);
    assert_eq!(app.get_render_state().voice.as_deref(), Some("Alex"));
    app.handle_event(AppEvent::NextVoice);
    assert_eq!(app.get_render_state().voice.as_deref(), Some("Samantha"));
    app.handle_event(AppEvent::NextVoice);
    app.handle_event(AppEvent::NextVoice);
    assert_eq!(app.get_render_state().voice.as_deref(), Some("Alex"));
    assert_eq!(app.mode(), AppMode::Playing);
}

#[test]
fn test_app_bad_voice_label_sets_message() {
    let mut app = app("one two three");
    app.handle_event(AppEvent::SelectVoice("Fred".to_string()));
    let state = app.get_render_state();
    assert_eq!(state.mode, AppMode::Finished);
    assert!(state.message.is_some());
}

#[test]
fn test_app_empty_text_reports_error() {
    let mut app = app("   ");
    app.start();
    assert_eq!(app.mode(), AppMode::Finished);
    assert!(app.get_render_state().message.is_some());
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = app("one two three");
    app.start();
    app.handle_keypress('q');
    assert_eq!(app.mode, AppMode::Quit);
    assert!(!app.controller().is_speaking());

    app.tick(Duration::from_secs(1));
    assert_eq!(app.mode, AppMode::Quit);
    let _render_state: RenderState = app.get_render_state();
}
