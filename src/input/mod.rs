use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Nothing to read in {0}")]
    Empty(String),
}

/// Supplies the ordered text fragments of one playback target.
pub trait TextSource {
    /// Human-readable origin, e.g. `file:notes.txt`
    fn describe(&self) -> String;

    /// Fragments in document order, whitespace-only fragments removed.
    fn fragments(&self) -> Result<Vec<String>, LoadError>;
}

/// Splits a document into paragraph fragments at blank lines and drops the
/// ones with nothing to speak.
pub fn split_fragments(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                fragments.push(std::mem::take(&mut current));
            }
            current.clear();
            continue;
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    if !current.trim().is_empty() {
        fragments.push(current);
    }

    fragments
}

pub mod clipboard;
pub mod file;
pub mod inline;

pub use clipboard::ClipboardSource;
pub use file::FileSource;
pub use inline::InlineSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fragments_on_blank_lines() {
        let text = "First paragraph\ncontinues here.\n\n   \nSecond one.\n";
        assert_eq!(
            split_fragments(text),
            vec!["First paragraph\ncontinues here.", "Second one."]
        );
    }

    #[test]
    fn test_split_fragments_whitespace_only() {
        assert!(split_fragments(" \n\t\n").is_empty());
        assert!(split_fragments("").is_empty());
    }
}
