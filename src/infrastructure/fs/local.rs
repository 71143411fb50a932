//! Local File System Implementation
//!
//! Persists emitted output files under a build output root.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::entities::OutputFile;
use crate::error::ManifestResult;

/// Local file system writer
///
/// Writes are atomic: content goes to a temp file in the target directory
/// which is then renamed over the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Write `output` below `root`, creating parent directories.
    ///
    /// Returns the full path written.
    pub fn write_output(&self, root: &Path, output: &OutputFile) -> ManifestResult<PathBuf> {
        let target = root.join(output.path());
        self.write_atomic(&target, output.content().as_bytes())?;
        debug!(path = %target.display(), bytes = output.len(), "wrote output file");
        Ok(target)
    }

    /// Atomically replace `path` with `content`
    pub fn write_atomic(&self, path: &Path, content: &[u8]) -> ManifestResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
