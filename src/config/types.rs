//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_OUT_FILE;
use crate::domain::value_objects::{ManifestShape, DEFAULT_ASSET_PATTERN};
use crate::error::ManifestResult;

use super::loader::{self, ConfigWarning};

/// Options recognized for a manifest pass.
///
/// TOML keys are snake_case; the camelCase spellings are accepted too.
///
/// ```toml
/// asset_patterns = ["*.css", "*.js"]
/// hashing_algorithm = "sha384"
/// out_file = "sha-hashes.json"
/// compact = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base-name glob patterns selecting assets
    #[serde(alias = "assetPatterns")]
    pub asset_patterns: Vec<String>,

    /// `sha256`, `sha384` or `sha512`. Validated when a pipeline is built.
    #[serde(alias = "hashingAlgorithm")]
    pub hashing_algorithm: String,

    /// Manifest file name handed back to the build
    #[serde(alias = "outFile")]
    pub out_file: String,

    /// Group digests by extension instead of by asset name
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_patterns: vec![DEFAULT_ASSET_PATTERN.to_string()],
            hashing_algorithm: "sha256".to_string(),
            out_file: DEFAULT_OUT_FILE.to_string(),
            compact: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ManifestResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `asset-sha.toml` from `dir` if present, defaults otherwise
    pub fn load_or_default(dir: &Path) -> ManifestResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(dir)
    }

    /// Apply environment variable overrides (ASSET_SHA_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Manifest layout selected by `compact`
    pub fn manifest_shape(&self) -> ManifestShape {
        ManifestShape::from_compact(self.compact)
    }
}
