//! Hashing Algorithm Value Object
//!
//! The digest algorithm applied to every asset in a pass.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::Digest as _;

use crate::error::ManifestError;

/// Supported digest algorithms
///
/// Names match the tokens accepted by `integrity` attributes
/// (`sha256-…`, `sha384-…`, `sha512-…`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HashingAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashingAlgorithm {
    /// Every supported algorithm
    pub const ALL: [HashingAlgorithm; 3] = [
        HashingAlgorithm::Sha256,
        HashingAlgorithm::Sha384,
        HashingAlgorithm::Sha512,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            HashingAlgorithm::Sha256 => "sha256",
            HashingAlgorithm::Sha384 => "sha384",
            HashingAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length of the raw digest in bytes
    pub fn output_len(&self) -> usize {
        match self {
            HashingAlgorithm::Sha256 => 32,
            HashingAlgorithm::Sha384 => 48,
            HashingAlgorithm::Sha512 => 64,
        }
    }

    /// Raw digest of `data`
    pub fn hash(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashingAlgorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
            HashingAlgorithm::Sha384 => sha2::Sha384::digest(data).to_vec(),
            HashingAlgorithm::Sha512 => sha2::Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for HashingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashingAlgorithm {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| ManifestError::InvalidConfiguration {
                option: "hashing_algorithm",
                message: format!(
                    "unknown algorithm '{}' (expected one of: sha256, sha384, sha512)",
                    s
                ),
            })
    }
}
