/// Whether a token is a spoken word or the single space rendered between words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Space,
}

/// Token struct for read-along highlighting
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Position in the full token sequence (words and spaces).
    pub index: usize,
    /// Index of the text fragment this token was cut from.
    pub fragment: usize,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}
