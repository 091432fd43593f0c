//! Headless renderer that records every call
//!
//! Used for tests and for driving playback without a terminal.

use super::renderer::{Renderer, RendererError};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCall {
    Highlight(usize),
    Unhighlight(usize),
    ScrollIntoView(usize),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    word_count: usize,
    highlighted: BTreeSet<usize>,
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new(word_count: usize) -> Self {
        Self {
            word_count,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn highlighted(&self) -> Vec<usize> {
        self.highlighted.iter().copied().collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn check(&self, index: usize) -> Result<(), RendererError> {
        if index >= self.word_count {
            return Err(RendererError::out_of_range(index, self.word_count));
        }
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn highlight(&mut self, index: usize) -> Result<(), RendererError> {
        self.check(index)?;
        self.highlighted.insert(index);
        self.calls.push(RenderCall::Highlight(index));
        Ok(())
    }

    fn unhighlight(&mut self, index: usize) -> Result<(), RendererError> {
        self.check(index)?;
        self.highlighted.remove(&index);
        self.calls.push(RenderCall::Unhighlight(index));
        Ok(())
    }

    fn scroll_into_view(&mut self, index: usize) -> Result<(), RendererError> {
        self.check(index)?;
        self.calls.push(RenderCall::ScrollIntoView(index));
        Ok(())
    }
}
