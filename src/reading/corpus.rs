//! Flat corpus string handed to the speech engine
//!
//! Boundary offsets reported by an engine are char offsets into this string,
//! so it must stay in exact correspondence with the word tokens.

use crate::reading::TokenSequence;

/// Words joined by single spaces, with a char-offset index for slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    /// Byte offset of every char, plus the total length as a final entry.
    char_starts: Vec<usize>,
}

impl Corpus {
    pub fn new(text: String) -> Self {
        let mut char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        char_starts.push(text.len());
        Self { text, char_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in chars, the unit of boundary offsets.
    pub fn char_len(&self) -> usize {
        self.char_starts.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text between two char offsets. Offsets past the end are clamped, and an
    /// inverted range yields an empty string.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let len = self.char_len();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return "";
        }
        &self.text[self.char_starts[start]..self.char_starts[end]]
    }
}

/// Builds the corpus: word texts joined with a single space, then trimmed.
pub fn build_corpus(sequence: &TokenSequence) -> Corpus {
    let joined = sequence
        .words()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Corpus::new(joined.trim().to_string())
}

/// Char offset at which each word starts in the corpus.
///
/// Prefix sum of word lengths plus one for each joining space.
pub fn word_start_offsets(sequence: &TokenSequence) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(sequence.word_count());
    let mut cursor = 0;
    for token in sequence.words() {
        offsets.push(cursor);
        cursor += token.text.chars().count() + 1;
    }
    offsets
}
