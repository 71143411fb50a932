//! Manifest Emitter Domain Service
//!
//! Serializes a manifest to JSON under the configured file name. No I/O:
//! the resulting `OutputFile` is persisted by the caller.

use tracing::info;

use crate::domain::entities::{ManifestDocument, OutputFile};
use crate::error::ManifestResult;

/// File name used when none is configured
pub const DEFAULT_OUT_FILE: &str = "sha-hashes.json";

#[derive(Debug, Clone)]
pub struct ManifestEmitter {
    out_file: String,
}

impl Default for ManifestEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_OUT_FILE)
    }
}

impl ManifestEmitter {
    pub fn new(out_file: impl Into<String>) -> Self {
        Self {
            out_file: out_file.into(),
        }
    }

    pub fn out_file(&self) -> &str {
        &self.out_file
    }

    /// Serialize `manifest` to compact JSON
    pub fn emit(&self, manifest: &ManifestDocument) -> ManifestResult<OutputFile> {
        let json = serde_json::to_string(manifest)?;
        info!(
            file = %self.out_file,
            bytes = json.len(),
            digests = manifest.hashes().digest_count(),
            "emitted manifest"
        );
        Ok(OutputFile::new(&self.out_file, json))
    }
}
