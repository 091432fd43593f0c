use crate::reading::Token;

/// Ordered, index-addressable tokens for one playback target.
///
/// Holds every token (words and the spaces between them) for rendering, plus
/// the positions of the word tokens. Word indices are the unit of "current
/// position" for synchronization and highlighting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
    words: Vec<usize>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        let words = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_word())
            .map(|(position, _)| position)
            .collect();
        Self { tokens, words }
    }

    /// All tokens in document order, spaces included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The word at `word_index`, skipping space tokens.
    pub fn word(&self, word_index: usize) -> Option<&Token> {
        self.words
            .get(word_index)
            .and_then(|&position| self.tokens.get(position))
    }

    pub fn words(&self) -> impl Iterator<Item = &Token> + '_ {
        self.words.iter().map(move |&position| &self.tokens[position])
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Maps a word index to its position in `tokens()`.
    pub fn token_position(&self, word_index: usize) -> Option<usize> {
        self.words.get(word_index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
