use super::{split_fragments, LoadError, TextSource};

/// Text already in memory.
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for InlineSource {
    fn describe(&self) -> String {
        "inline text".to_string()
    }

    fn fragments(&self) -> Result<Vec<String>, LoadError> {
        let fragments = split_fragments(&self.text);
        if fragments.is_empty() {
            return Err(LoadError::Empty(self.describe()));
        }
        Ok(fragments)
    }
}
