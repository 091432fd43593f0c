use super::{split_fragments, LoadError, TextSource};

/// Text currently on the system clipboard.
pub struct ClipboardSource;

impl TextSource for ClipboardSource {
    fn describe(&self) -> String {
        "clipboard".to_string()
    }

    fn fragments(&self) -> Result<Vec<String>, LoadError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
        let text = clipboard
            .get_text()
            .map_err(|e| LoadError::Clipboard(e.to_string()))?;

        let fragments = split_fragments(&text);
        if fragments.is_empty() {
            return Err(LoadError::Empty(self.describe()));
        }
        Ok(fragments)
    }
}
