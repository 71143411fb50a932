//! Content Digest Value Object
//!
//! The base64 form of an asset's hash, as written into the manifest.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use super::HashingAlgorithm;

/// Standard (padded) base64 encoding of a raw digest.
///
/// A pure function of `(algorithm, content)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Digest text content as its UTF-8 bytes
    pub fn compute(algorithm: HashingAlgorithm, content: &str) -> Self {
        Self::from_bytes(algorithm, content.as_bytes())
    }

    /// Digest raw bytes
    pub fn from_bytes(algorithm: HashingAlgorithm, data: &[u8]) -> Self {
        Self(BASE64.encode(algorithm.hash(data)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<algorithm>-<digest>` form used by subresource-integrity attributes
    pub fn to_sri(&self, algorithm: HashingAlgorithm) -> String {
        format!("{}-{}", algorithm, self.0)
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
