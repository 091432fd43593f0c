//! Terminal passage view
//!
//! Holds the tokens being read, tracks which words are highlighted and which
//! word should be kept in view, and lays the passage out into wrapped lines
//! for a given width.

use crate::reading::{TokenKind, TokenSequence};
use crate::rendering::{Renderer, RendererError};
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::collections::BTreeSet;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A run of text on one laid-out line; `word` is set for word pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub word: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassageLayout {
    pub lines: Vec<Vec<Piece>>,
}

impl PassageLayout {
    /// Row holding the first piece of `word`.
    pub fn row_of(&self, word: usize) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.iter().any(|piece| piece.word == Some(word)))
    }
}

pub struct PassageRenderer {
    sequence: TokenSequence,
    highlighted: BTreeSet<usize>,
    focus: Option<usize>,
}

impl PassageRenderer {
    pub fn new(sequence: &TokenSequence) -> Self {
        Self {
            sequence: sequence.clone(),
            highlighted: BTreeSet::new(),
            focus: None,
        }
    }

    pub fn is_highlighted(&self, word: usize) -> bool {
        self.highlighted.contains(&word)
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Wrap the passage to `width` columns.
    ///
    /// Fragments start on a new line with a blank line between them. Spaces
    /// never start or end a line. Words wider than the line are broken at
    /// grapheme boundaries.
    pub fn layout(&self, width: u16) -> PassageLayout {
        let width = usize::from(width.max(1));
        let mut lines: Vec<Vec<Piece>> = Vec::new();
        let mut line: Vec<Piece> = Vec::new();
        let mut line_width = 0;
        let mut fragment = None;
        let mut word_index = 0;

        for token in self.sequence.tokens() {
            if fragment.is_some_and(|f| f != token.fragment) {
                lines.push(std::mem::take(&mut line));
                lines.push(Vec::new());
                line_width = 0;
            }
            fragment = Some(token.fragment);

            match token.kind {
                TokenKind::Space => {
                    if line.is_empty() || line_width + 1 > width {
                        continue;
                    }
                    line.push(Piece {
                        text: token.text.clone(),
                        word: None,
                    });
                    line_width += 1;
                }
                TokenKind::Word => {
                    let token_width = token.text.width();
                    if !line.is_empty() && line_width + token_width > width {
                        if line.last().is_some_and(|piece| piece.word.is_none()) {
                            line.pop();
                        }
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }

                    for chunk in split_to_width(&token.text, width) {
                        let chunk_width = chunk.width();
                        if !line.is_empty() && line_width + chunk_width > width {
                            lines.push(std::mem::take(&mut line));
                            line_width = 0;
                        }
                        line.push(Piece {
                            text: chunk,
                            word: Some(word_index),
                        });
                        line_width += chunk_width;
                    }
                    word_index += 1;
                }
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
        PassageLayout { lines }
    }

    /// Build the widget for an area `width` x `height`, scrolled so the focused
    /// word sits in the middle row.
    pub fn widget(&self, width: u16, height: u16, theme: &Theme) -> Paragraph<'static> {
        let layout = self.layout(width);
        let scroll = self
            .focus
            .and_then(|word| layout.row_of(word))
            .map_or(0, |row| row.saturating_sub(usize::from(height) / 2));

        let lines: Vec<Line<'static>> = layout
            .lines
            .into_iter()
            .map(|pieces| {
                let spans: Vec<Span<'static>> = pieces
                    .into_iter()
                    .map(|piece| {
                        let style = match piece.word {
                            Some(word) if self.is_highlighted(word) => theme.highlight_style(),
                            _ => theme.text_style(),
                        };
                        Span::styled(piece.text, style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .style(theme.text_style())
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
    }

    fn check(&self, index: usize) -> Result<(), RendererError> {
        let words = self.sequence.word_count();
        if index >= words {
            return Err(RendererError::out_of_range(index, words));
        }
        Ok(())
    }
}

/// Break `text` into chunks no wider than `width`, keeping graphemes whole.
fn split_to_width(text: &str, width: usize) -> Vec<String> {
    if text.width() <= width {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if !chunk.is_empty() && chunk_width + grapheme_width > width {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push_str(grapheme);
        chunk_width += grapheme_width;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

impl Renderer for PassageRenderer {
    fn highlight(&mut self, index: usize) -> Result<(), RendererError> {
        self.check(index)?;
        self.highlighted.insert(index);
        Ok(())
    }

    fn unhighlight(&mut self, index: usize) -> Result<(), RendererError> {
        self.check(index)?;
        self.highlighted.remove(&index);
        Ok(())
    }

    fn scroll_into_view(&mut self, index: usize) -> Result<(), RendererError> {
        self.check(index)?;
        self.focus = Some(index);
        Ok(())
    }
}
