//! Frame-deferred highlight application
//!
//! Style changes are queued as they are requested and applied together when
//! the next frame is painted, so a burst of boundary events between frames
//! costs one paint.

use super::renderer::{Renderer, RendererError};
use crate::sync::Transition;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StyleChange {
    index: usize,
    on: bool,
}

pub struct HighlightController<R: Renderer> {
    renderer: R,
    pending: Vec<StyleChange>,
}

impl<R: Renderer> HighlightController<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            pending: Vec::new(),
        }
    }

    /// Queue a style change for the next frame.
    pub fn set_highlighted(&mut self, index: usize, on: bool) {
        self.pending.push(StyleChange { index, on });
    }

    /// Queue the unhighlight half before the highlight half of a transition.
    pub fn apply(&mut self, transition: &Transition) {
        match transition {
            Transition::Start { highlight } => {
                if let Some(index) = highlight {
                    self.set_highlighted(*index, false);
                    self.set_highlighted(*index, true);
                }
            }
            Transition::Advance(advance) => {
                if let Some(index) = advance.unhighlight {
                    self.set_highlighted(index, false);
                }
                if let Some(index) = advance.highlight {
                    self.set_highlighted(index, true);
                }
            }
            Transition::Hold | Transition::Ignore => {}
        }
    }

    pub fn unhighlight_all(&mut self, word_count: usize) {
        for index in 0..word_count {
            self.set_highlighted(index, false);
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Paint the queued changes.
    ///
    /// The last request for each word wins and words are styled in the order
    /// they were first requested. The last word left highlighted is scrolled
    /// into view. Returns the number of style changes applied.
    pub fn flush(&mut self) -> Result<usize, RendererError> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let mut resolved: Vec<StyleChange> = Vec::with_capacity(self.pending.len());
        let mut slots: HashMap<usize, usize> = HashMap::new();
        for change in self.pending.drain(..) {
            match slots.get(&change.index) {
                Some(&slot) => resolved[slot].on = change.on,
                None => {
                    slots.insert(change.index, resolved.len());
                    resolved.push(change);
                }
            }
        }

        for change in &resolved {
            if change.on {
                self.renderer.highlight(change.index)?;
            } else {
                self.renderer.unhighlight(change.index)?;
            }
        }

        if let Some(focus) = resolved.iter().rev().find(|change| change.on) {
            self.renderer.scroll_into_view(focus.index)?;
        }

        Ok(resolved.len())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{RecordingRenderer, RenderCall};
    use crate::sync::Advance;

    fn controller(words: usize) -> HighlightController<RecordingRenderer> {
        HighlightController::new(RecordingRenderer::new(words))
    }

    #[test]
    fn test_nothing_applied_before_flush() {
        let mut highlighter = controller(3);
        highlighter.set_highlighted(1, true);
        assert!(highlighter.has_pending());
        assert!(highlighter.renderer().calls().is_empty());

        assert_eq!(highlighter.flush().unwrap(), 1);
        assert!(!highlighter.has_pending());
        assert_eq!(
            highlighter.renderer().calls(),
            &[RenderCall::Highlight(1), RenderCall::ScrollIntoView(1)]
        );
    }

    #[test]
    fn test_flush_coalesces_to_last_request() {
        let mut highlighter = controller(5);
        highlighter.set_highlighted(0, true);
        highlighter.set_highlighted(0, false);
        highlighter.set_highlighted(1, true);
        highlighter.set_highlighted(1, false);
        highlighter.set_highlighted(2, true);

        assert_eq!(highlighter.flush().unwrap(), 3);
        assert_eq!(
            highlighter.renderer().calls(),
            &[
                RenderCall::Unhighlight(0),
                RenderCall::Unhighlight(1),
                RenderCall::Highlight(2),
                RenderCall::ScrollIntoView(2),
            ]
        );
        assert_eq!(highlighter.renderer().highlighted(), vec![2]);
    }

    #[test]
    fn test_apply_advance_orders_unhighlight_first() {
        let mut highlighter = controller(3);
        highlighter.apply(&Transition::Advance(Advance {
            from: 0,
            to: 1,
            unhighlight: Some(0),
            highlight: Some(1),
            naive_increment: 1,
            corrected: false,
        }));
        highlighter.flush().unwrap();
        assert_eq!(
            highlighter.renderer().calls(),
            &[
                RenderCall::Unhighlight(0),
                RenderCall::Highlight(1),
                RenderCall::ScrollIntoView(1),
            ]
        );
    }

    #[test]
    fn test_apply_start_highlights_first_word() {
        let mut highlighter = controller(2);
        highlighter.apply(&Transition::Start { highlight: Some(0) });
        highlighter.flush().unwrap();
        assert_eq!(highlighter.renderer().highlighted(), vec![0]);
    }

    #[test]
    fn test_hold_queues_nothing() {
        let mut highlighter = controller(2);
        highlighter.apply(&Transition::Hold);
        highlighter.apply(&Transition::Ignore);
        assert!(!highlighter.has_pending());
        assert_eq!(highlighter.flush().unwrap(), 0);
    }

    #[test]
    fn test_unhighlight_all_does_not_scroll() {
        let mut highlighter = controller(3);
        highlighter.set_highlighted(2, true);
        highlighter.flush().unwrap();
        highlighter.renderer_mut().clear_calls();

        highlighter.unhighlight_all(3);
        highlighter.flush().unwrap();
        assert!(highlighter.renderer().highlighted().is_empty());
        assert!(!highlighter
            .renderer()
            .calls()
            .iter()
            .any(|call| matches!(call, RenderCall::ScrollIntoView(_))));
    }

    #[test]
    fn test_flush_surfaces_renderer_errors() {
        let mut highlighter = controller(1);
        highlighter.set_highlighted(4, true);
        assert!(highlighter.flush().is_err());
        assert!(!highlighter.has_pending());
    }
}
