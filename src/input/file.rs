use super::{split_fragments, LoadError, TextSource};
use std::path::{Path, PathBuf};

/// Plain-text file, one fragment per paragraph.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn fragments(&self) -> Result<Vec<String>, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::FileNotFound(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let fragments = split_fragments(&content);
        if fragments.is_empty() {
            return Err(LoadError::Empty(self.describe()));
        }

        log::info!(
            "loaded {} fragments from {}",
            fragments.len(),
            self.path.display()
        );
        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_empty_file_error() {
        let test_file = "test_readalong_empty.txt";
        File::create(test_file).unwrap();

        let result = FileSource::new(test_file).fragments();
        match result {
            Err(LoadError::Empty(_)) => (),
            _ => panic!("Expected Empty error"),
        }

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = FileSource::new("nonexistent_file_12345.txt").fragments();
        match result {
            Err(LoadError::FileNotFound(_)) => (),
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_valid_file_loads_paragraphs() {
        let test_file = "test_readalong_valid.txt";
        let mut file = File::create(test_file).unwrap();
        file.write_all(b"hello world\n\nsecond   paragraph").unwrap();

        let fragments = FileSource::new(test_file).fragments().unwrap();
        assert_eq!(fragments, vec!["hello world", "second   paragraph"]);

        fs::remove_file(test_file).unwrap();
    }
}
