use crate::app::RenderState;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const BAR_WIDTH: usize = 20;

pub fn render_progress_bar(progress: (usize, usize), theme: &Theme) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        current.min(total) * BAR_WIDTH / total
    };
    let empty_len = BAR_WIDTH - filled_len;

    let mut spans = Vec::new();
    for _ in 0..filled_len {
        spans.push(Span::styled("─", Style::default().fg(theme.highlight_background)));
    }
    for _ in 0..empty_len {
        spans.push(Span::styled("─", theme.dimmed_style()));
    }

    Line::from(spans).alignment(Alignment::Center)
}

/// One-line summary: mode, source, voice, rate, word count and any message.
pub fn render_status_line(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let (read, total) = state.progress;
    let mut spans = vec![
        Span::styled(format!(" {} ", state.mode.label()), theme.highlight_style()),
        Span::styled(format!("  {}", state.source), theme.text_style()),
        Span::styled(
            format!(
                "  {} x{:.1}  {}/{} words ({}%)",
                state.voice_label(),
                state.rate,
                read,
                total,
                state.percent()
            ),
            theme.dimmed_style(),
        ),
    ];
    if let Some(message) = &state.message {
        spans.push(Span::styled(format!("  {}", message), theme.text_style()));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(theme.text_style())
}

pub fn render_help_line(theme: &Theme) -> Paragraph<'static> {
    Paragraph::new("space play/pause · v next voice · r restart · q quit")
        .alignment(Alignment::Right)
        .style(theme.dimmed_style())
}
