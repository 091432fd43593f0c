use crate::config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};

/// Read-along colours
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub highlight_background: Color,
    pub highlight_text: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from(ThemeConfig::default())
    }
}

impl From<ThemeConfig> for Theme {
    fn from(config: ThemeConfig) -> Self {
        let rgb = |(r, g, b): (u8, u8, u8)| Color::Rgb(r, g, b);
        Self {
            background: rgb(config.background),
            text: rgb(config.text),
            highlight_background: rgb(config.highlight_background),
            highlight_text: rgb(config.highlight_text),
            dimmed: rgb(config.dimmed),
        }
    }
}

impl Theme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_text)
            .bg(self.highlight_background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed).bg(self.background)
    }
}
