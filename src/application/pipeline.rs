//! Manifest pipeline
//!
//! Runs one build pass through the three domain services.
//!
//! ## Flow
//!
//! 1. Select assets by base-name pattern (`AssetSelector`)
//! 2. Digest each selected asset in order (`DigestAggregator`)
//! 3. Serialize the manifest under its output name (`ManifestEmitter`)
//!
//! All configuration is validated in [`ManifestPipeline::new`], before any
//! asset is touched. A pass either yields a complete manifest or fails.

use std::path::{Component, Path};

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::entities::{ManifestDocument, OutputFile};
use crate::domain::ports::Asset;
use crate::domain::services::{AssetSelector, DigestAggregator, ManifestEmitter};
use crate::domain::value_objects::{AssetPatterns, HashingAlgorithm, ManifestShape};
use crate::error::{ManifestError, ManifestResult};

/// Validated, reusable pass runner.
///
/// Holds only configuration; every pass starts from a fresh aggregator.
#[derive(Debug, Clone)]
pub struct ManifestPipeline {
    selector: AssetSelector,
    algorithm: HashingAlgorithm,
    shape: ManifestShape,
    emitter: ManifestEmitter,
}

impl ManifestPipeline {
    /// Validate `config` and build a pipeline.
    ///
    /// Fails with `InvalidConfiguration` for an unknown algorithm, a pattern
    /// that does not compile, or an output name that is empty or leaves the
    /// output directory.
    pub fn new(config: &Config) -> ManifestResult<Self> {
        let algorithm: HashingAlgorithm = config.hashing_algorithm.parse()?;
        let patterns = AssetPatterns::new(&config.asset_patterns)?;
        validate_out_file(&config.out_file)?;

        Ok(Self {
            selector: AssetSelector::new(patterns),
            algorithm,
            shape: config.manifest_shape(),
            emitter: ManifestEmitter::new(config.out_file.clone()),
        })
    }

    pub fn algorithm(&self) -> HashingAlgorithm {
        self.algorithm
    }

    pub fn shape(&self) -> ManifestShape {
        self.shape
    }

    pub fn out_file(&self) -> &str {
        self.emitter.out_file()
    }

    pub fn selector(&self) -> &AssetSelector {
        &self.selector
    }

    /// Select and digest `assets`, producing the manifest for this pass
    pub fn run_pass<A: Asset>(&self, assets: &[A]) -> ManifestResult<ManifestDocument> {
        let selected = self.selector.select(assets);
        info!(
            total = assets.len(),
            selected = selected.len(),
            algorithm = %self.algorithm,
            "selected assets"
        );

        let mut aggregator = DigestAggregator::new(self.algorithm, self.shape);
        for asset in selected {
            aggregator.add(asset.name(), asset.content())?;
        }

        let manifest = aggregator.into_manifest();
        debug!(keys = manifest.hashes().len(), "manifest assembled");
        Ok(manifest)
    }

    /// Run a pass and serialize its manifest
    pub fn emit<A: Asset>(&self, assets: &[A]) -> ManifestResult<OutputFile> {
        let manifest = self.run_pass(assets)?;
        self.emitter.emit(&manifest)
    }
}

/// Run a single pass with a one-off pipeline
pub fn run_pass<A: Asset>(assets: &[A], config: &Config) -> ManifestResult<ManifestDocument> {
    ManifestPipeline::new(config)?.run_pass(assets)
}

fn validate_out_file(out_file: &str) -> ManifestResult<()> {
    let invalid = |message: &str| ManifestError::InvalidConfiguration {
        option: "out_file",
        message: format!("'{}' {}", out_file, message),
    };

    if out_file.trim().is_empty() {
        return Err(invalid("is empty"));
    }

    let path = Path::new(out_file);
    if path.is_absolute() || path.has_root() {
        return Err(invalid("must be relative to the output directory"));
    }
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
    {
        return Err(invalid("must not leave the output directory"));
    }
    Ok(())
}
