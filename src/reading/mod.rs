pub mod corpus;
pub mod sequence;
pub mod timing;
pub mod token;
pub mod tokenizer;

pub use corpus::{build_corpus, word_start_offsets, Corpus};
pub use sequence::TokenSequence;
pub use timing::{ends_sentence, word_duration_ms, wpm_to_milliseconds};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
