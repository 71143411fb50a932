//! Manifest Shape Value Object

use serde::{Deserialize, Serialize};

/// Layout of the `hashes` object in the manifest
///
/// - `Flat`: full asset name → digest
/// - `Compact`: extension → digests in encounter order (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ManifestShape {
    Flat,
    #[default]
    Compact,
}

impl ManifestShape {
    /// Shape selected by the `compact` boolean option
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            ManifestShape::Compact
        } else {
            ManifestShape::Flat
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, ManifestShape::Compact)
    }
}
