use crate::app::{App, AppEvent, AppMode};
use crate::speech::SpeechEngine;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crate::ui::view::{render_help_line, render_progress_bar, render_status_line};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    // Dropped after the terminal so the screen is restored last.
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            _guard: guard,
        })
    }

    pub fn run_event_loop<E: SpeechEngine>(&mut self, app: &mut App<E>) -> io::Result<AppMode> {
        let render_tick = Duration::from_millis(1000 / 60);
        let mut last_tick = Instant::now();

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            if event::poll(render_tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                app.handle_event(AppEvent::Quit)
                            }
                            KeyCode::Char(c) => app.handle_keypress(c),
                            KeyCode::Esc => app.handle_event(AppEvent::Quit),
                            _ => {}
                        }
                    }
                }
            }

            let now = Instant::now();
            app.tick(now.duration_since(last_tick));
            last_tick = now;

            self.render_frame(app)?;
        }
    }

    pub fn render_frame<E: SpeechEngine>(&mut self, app: &App<E>) -> io::Result<()> {
        let render_state = app.get_render_state();
        let theme = self.theme;

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Block::default().style(theme.text_style()), area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);

            let passage_area = chunks[0];
            let passage = app
                .passage()
                .widget(passage_area.width, passage_area.height, &theme);
            frame.render_widget(passage, passage_area);

            frame.render_widget(render_progress_bar(render_state.progress, &theme), chunks[1]);
            frame.render_widget(render_status_line(&render_state, &theme), chunks[2]);
            frame.render_widget(render_help_line(&theme), chunks[3]);
        })?;

        Ok(())
    }
}
