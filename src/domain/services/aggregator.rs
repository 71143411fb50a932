//! Digest Aggregator Domain Service
//!
//! Digests each selected asset and accumulates the results into the flat
//! or compact manifest layout. One aggregator serves exactly one pass.

use tracing::{debug, warn};

use crate::domain::entities::{ManifestDocument, ManifestHashes};
use crate::domain::ports::TextSource;
use crate::domain::value_objects::{extension_key, ContentDigest, HashingAlgorithm, ManifestShape};
use crate::error::{ManifestError, ManifestResult};

/// Digest one asset's content, reporting non-text payloads against its name
pub fn digest_asset<S>(
    algorithm: HashingAlgorithm,
    asset_name: &str,
    content: &S,
) -> ManifestResult<ContentDigest>
where
    S: TextSource + ?Sized,
{
    let text = content
        .as_text()
        .map_err(|source| ManifestError::UnsupportedContent {
            asset: asset_name.to_string(),
            source,
        })?;
    Ok(ContentDigest::compute(algorithm, &text))
}

/// Accumulates digests for one pass
#[derive(Debug, Clone)]
pub struct DigestAggregator {
    algorithm: HashingAlgorithm,
    hashes: ManifestHashes,
}

impl DigestAggregator {
    pub fn new(algorithm: HashingAlgorithm, shape: ManifestShape) -> Self {
        Self {
            algorithm,
            hashes: ManifestHashes::new(shape),
        }
    }

    pub fn algorithm(&self) -> HashingAlgorithm {
        self.algorithm
    }

    pub fn shape(&self) -> ManifestShape {
        self.hashes.shape()
    }

    /// Digest one asset and record it.
    ///
    /// Fails with `UnsupportedContent` when the payload is not text; the
    /// aggregator is left unchanged in that case.
    ///
    /// Flat layout: a repeated name overwrites the earlier digest in place.
    /// Compact layout: the digest is appended under the name's extension.
    pub fn add<S>(&mut self, asset_name: &str, content: &S) -> ManifestResult<()>
    where
        S: TextSource + ?Sized,
    {
        let digest = digest_asset(self.algorithm, asset_name, content)?;
        debug!(asset = asset_name, digest = %digest, "digested asset");

        match &mut self.hashes {
            ManifestHashes::Flat(map) => {
                if map.insert(asset_name.to_string(), digest).is_some() {
                    warn!(asset = asset_name, "duplicate asset name, keeping last digest");
                }
            }
            ManifestHashes::Compact(map) => {
                map.entry(extension_key(asset_name).to_string())
                    .or_default()
                    .push(digest);
            }
        }
        Ok(())
    }

    /// Finish the pass
    pub fn into_manifest(self) -> ManifestDocument {
        ManifestDocument::new(self.algorithm, self.hashes)
    }
}
