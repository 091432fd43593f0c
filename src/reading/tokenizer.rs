use crate::reading::{Token, TokenKind, TokenSequence};

/// Tokenizes text fragments into words separated by single-space tokens.
///
/// Each fragment is split on runs of whitespace, so the words of a fragment
/// come back joined by exactly one space regardless of the original spacing.
/// A whitespace-only fragment contributes nothing. No space token is inserted
/// between fragments; the corpus joins the last word of one fragment and the
/// first word of the next with a single space anyway.
pub fn tokenize<S: AsRef<str>>(fragments: &[S]) -> TokenSequence {
    let mut tokens = Vec::new();

    for (fragment_index, fragment) in fragments.iter().enumerate() {
        for (word_index, word) in fragment.as_ref().split_whitespace().enumerate() {
            if word_index > 0 {
                tokens.push(Token {
                    text: " ".to_string(),
                    kind: TokenKind::Space,
                    index: tokens.len(),
                    fragment: fragment_index,
                });
            }
            tokens.push(Token {
                text: word.to_string(),
                kind: TokenKind::Word,
                index: tokens.len(),
                fragment: fragment_index,
            });
        }
    }

    TokenSequence::new(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sequence: &TokenSequence) -> Vec<&str> {
        sequence.tokens().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_single_word() {
        let sequence = tokenize(&["hello"]);
        assert_eq!(texts(&sequence), vec!["hello"]);
        assert_eq!(sequence.word_count(), 1);
    }

    #[test]
    fn test_tokenize_inserts_single_spaces() {
        let sequence = tokenize(&["hello   wide\t\nworld"]);
        assert_eq!(texts(&sequence), vec!["hello", " ", "wide", " ", "world"]);
        assert_eq!(sequence.word_count(), 3);
    }

    #[test]
    fn test_tokenize_ignores_leading_and_trailing_whitespace() {
        let sequence = tokenize(&["  padded words  "]);
        assert_eq!(texts(&sequence), vec!["padded", " ", "words"]);
    }

    #[test]
    fn test_tokenize_whitespace_fragment_is_empty() {
        let sequence = tokenize(&["one", "   \n ", "two"]);
        assert_eq!(texts(&sequence), vec!["one", "two"]);
        assert_eq!(sequence.word(1).unwrap().fragment, 2);
    }

    #[test]
    fn test_tokenize_indexes_are_positions() {
        let sequence = tokenize(&["a b", "c"]);
        for (position, token) in sequence.tokens().iter().enumerate() {
            assert_eq!(token.index, position);
        }
        assert_eq!(sequence.word(2).unwrap().text, "c");
        assert_eq!(sequence.word(2).unwrap().fragment, 1);
    }

    #[test]
    fn test_tokenize_keeps_punctuation_attached() {
        let sequence = tokenize(&["Wait, what?! — fine."]);
        let words: Vec<&str> = sequence.words().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["Wait,", "what?!", "—", "fine."]);
    }
}
