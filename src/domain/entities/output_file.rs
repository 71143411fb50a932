//! OutputFile entity - a file handed back to the build pipeline
//!
//! The emitter produces one of these per pass; persisting it is the caller's job.

use std::path::PathBuf;

/// A generated file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the build output root
    path: PathBuf,
    content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the output path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get the content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Split into `(path, content)`
    pub fn into_parts(self) -> (PathBuf, String) {
        (self.path, self.content)
    }
}
