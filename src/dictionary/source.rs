//! Raw word list sources
//!
//! A source hands the curator one blob of newline-separated text. Load
//! failures are the caller's signal to skip the source, never to abort
//! curation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One raw word list the curator can pull from
///
/// Send + Sync so a set of sources can sit behind the shared dictionary
/// cache.
pub trait WordSource: Send + Sync {
    /// Human-readable name for reports and logs
    fn label(&self) -> String;

    /// Fetch the raw newline-separated text
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source cannot be read. The curator
    /// treats a failed source as empty and moves on.
    fn load(&self) -> io::Result<String>;
}

/// Word list backed by a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for FileSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Word list held in memory
///
/// Used for the embedded seed list and in tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    text: String,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Build from a slice of words, one per line
    #[must_use]
    pub fn from_words(label: &str, words: &[&str]) -> Self {
        Self::new(label, words.join("\n"))
    }
}

impl WordSource for StaticSource {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn load(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}
