//! Boundary resynchronization
//!
//! Speech engines report progress only as a char offset into the corpus, and
//! those reports are coarse: words get skipped, offsets land mid-word, and
//! punctuation produces boundaries of its own. The resynchronizer turns each
//! word boundary into a word-index transition by counting the words elapsed
//! since the last boundary, then correcting that count with a bounded scan for
//! the word whose text actually appears in the elapsed slice.
//!
//! The logic here is pure: it returns a [`Transition`] and leaves applying it
//! to the caller.

use crate::config::ResyncConfig;
use crate::reading::{Corpus, TokenSequence};
use crate::speech::{BoundaryEvent, BoundaryKind};
use crate::sync::PlaybackState;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PUNCTUATION_ONLY: Regex =
        Regex::new(r"^\p{P}+$").expect("punctuation pattern is valid");
}

/// True when `text` is non-empty and made of punctuation only ("—", "...").
pub fn is_only_punctuation(text: &str) -> bool {
    PUNCTUATION_ONLY.is_match(text)
}

/// A forward step of the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub from: usize,
    pub to: usize,
    /// Word to clear; `None` once playback has run past the last word.
    pub unhighlight: Option<usize>,
    /// Word to mark; `None` when the step lands at or beyond the end.
    pub highlight: Option<usize>,
    /// Words counted in the elapsed text before correction.
    pub naive_increment: usize,
    /// Whether the lookahead replaced the naive count.
    pub corrected: bool,
}

impl Advance {
    pub fn increment(&self) -> usize {
        self.to - self.from
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First word boundary of an utterance: no advance, highlight the first word.
    Start { highlight: Option<usize> },
    Advance(Advance),
    /// Elapsed text was empty or punctuation only.
    Hold,
    /// Not a word boundary.
    Ignore,
}

/// Result of the bounded lookahead scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookahead {
    pub target: usize,
    /// Word indices inspected.
    pub probes: usize,
    pub matched: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Resynchronizer {
    state: PlaybackState,
    config: ResyncConfig,
}

impl Resynchronizer {
    pub fn new(config: ResyncConfig) -> Self {
        Self {
            state: PlaybackState::new(),
            config,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn config(&self) -> &ResyncConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Handles one boundary event and returns the highlight transition it causes.
    pub fn on_boundary(
        &mut self,
        event: &BoundaryEvent,
        corpus: &Corpus,
        sequence: &TokenSequence,
    ) -> Transition {
        if event.kind != BoundaryKind::Word {
            return Transition::Ignore;
        }

        let word_count = sequence.word_count();
        let current = self.state.current_index;

        let Some(last_offset) = self.state.last_char_offset else {
            self.state.last_char_offset = Some(event.char_offset);
            return Transition::Start {
                highlight: (current < word_count).then_some(current),
            };
        };

        let elapsed = corpus.slice(last_offset, event.char_offset).trim();

        // The offset is deliberately left alone here, so the next window
        // starts from the last boundary that advanced.
        if elapsed.is_empty() || is_only_punctuation(elapsed) {
            log::debug!(
                "holding at word {} for elapsed text {:?} (offset {})",
                current,
                elapsed,
                event.char_offset
            );
            return Transition::Hold;
        }

        let naive_increment = elapsed.split(' ').count();
        let lookahead = self.lookahead(elapsed, sequence, naive_increment);
        let corrected = lookahead.matched && lookahead.target > current;
        let increment = if lookahead.target > current {
            lookahead.target - current
        } else {
            naive_increment
        };

        log::trace!(
            "boundary at {}: elapsed {:?}, naive +{}, lookahead {:?}",
            event.char_offset,
            elapsed,
            naive_increment,
            lookahead
        );

        let highlight = word_count
            .checked_sub(increment)
            .filter(|&limit| current < limit)
            .map(|_| current + increment);

        let advance = Advance {
            from: current,
            to: current + increment,
            unhighlight: (current < word_count).then_some(current),
            highlight,
            naive_increment,
            corrected,
        };

        self.state.current_index = advance.to;
        self.state.last_char_offset = Some(event.char_offset);
        Transition::Advance(advance)
    }

    /// Scans a window around the current word for the first word whose text
    /// appears in `elapsed`.
    ///
    /// Probes from `probe_back` words behind the current index up to, not
    /// including, `lookahead_window` words ahead of it. Without a match the
    /// target falls back to the naive count.
    pub fn lookahead(
        &self,
        elapsed: &str,
        sequence: &TokenSequence,
        naive_increment: usize,
    ) -> Lookahead {
        let current = self.state.current_index;
        let start = current.saturating_sub(self.config.probe_back);
        let end = current + self.config.lookahead_window;

        let mut probes = 0;
        for probe in start..end {
            let Some(word) = sequence.word(probe) else {
                break;
            };
            probes += 1;
            if elapsed.contains(word.text.as_str()) {
                return Lookahead {
                    target: probe,
                    probes,
                    matched: true,
                };
            }
        }

        Lookahead {
            target: current + naive_increment,
            probes,
            matched: false,
        }
    }
}
