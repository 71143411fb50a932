//! ManifestDocument entity - the single output value of a pass
//!
//! JSON layout:
//!
//! ```json
//! { "hashingAlgorithm": "sha256", "hashes": { "main.css": "<base64>" } }
//! { "hashingAlgorithm": "sha256", "hashes": { ".css": ["<base64>", "<base64>"] } }
//! ```
//!
//! Both maps iterate in insertion order, so serialization follows the order
//! in which assets were encountered.
//!
//! Manifests are write-only. An empty table serializes as `{}` in either
//! shape, so the shape cannot be recovered from the JSON and no
//! `Deserialize` impl is provided.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::value_objects::{ContentDigest, HashingAlgorithm, ManifestShape};

/// Digest table in one of the two manifest layouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ManifestHashes {
    /// Full asset name → digest
    Flat(IndexMap<String, ContentDigest>),
    /// Extension (with dot) → digests in encounter order
    Compact(IndexMap<String, Vec<ContentDigest>>),
}

impl ManifestHashes {
    /// Empty table for the given shape
    pub fn new(shape: ManifestShape) -> Self {
        match shape {
            ManifestShape::Flat => ManifestHashes::Flat(IndexMap::new()),
            ManifestShape::Compact => ManifestHashes::Compact(IndexMap::new()),
        }
    }

    pub fn shape(&self) -> ManifestShape {
        match self {
            ManifestHashes::Flat(_) => ManifestShape::Flat,
            ManifestHashes::Compact(_) => ManifestShape::Compact,
        }
    }

    /// Number of keys (asset names or extensions)
    pub fn len(&self) -> usize {
        match self {
            ManifestHashes::Flat(map) => map.len(),
            ManifestHashes::Compact(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of digests recorded
    pub fn digest_count(&self) -> usize {
        match self {
            ManifestHashes::Flat(map) => map.len(),
            ManifestHashes::Compact(map) => map.values().map(Vec::len).sum(),
        }
    }

    /// Digest for a full asset name (flat layout only)
    pub fn by_name(&self, asset_name: &str) -> Option<&ContentDigest> {
        match self {
            ManifestHashes::Flat(map) => map.get(asset_name),
            ManifestHashes::Compact(_) => None,
        }
    }

    /// Digests for an extension such as `.css` (compact layout only)
    pub fn by_extension(&self, extension: &str) -> Option<&[ContentDigest]> {
        match self {
            ManifestHashes::Flat(_) => None,
            ManifestHashes::Compact(map) => map.get(extension).map(Vec::as_slice),
        }
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<&str> {
        match self {
            ManifestHashes::Flat(map) => map.keys().map(String::as_str).collect(),
            ManifestHashes::Compact(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

/// Algorithm plus digest table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument {
    hashing_algorithm: HashingAlgorithm,
    hashes: ManifestHashes,
}

impl ManifestDocument {
    pub fn new(hashing_algorithm: HashingAlgorithm, hashes: ManifestHashes) -> Self {
        Self {
            hashing_algorithm,
            hashes,
        }
    }

    pub fn hashing_algorithm(&self) -> HashingAlgorithm {
        self.hashing_algorithm
    }

    pub fn hashes(&self) -> &ManifestHashes {
        &self.hashes
    }

    pub fn shape(&self) -> ManifestShape {
        self.hashes.shape()
    }
}
