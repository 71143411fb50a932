//! Asset Selector Domain Service
//!
//! Narrows the full asset list of a pass down to the assets whose base file
//! name matches a configured pattern. Misses are silently skipped.

use crate::domain::ports::Asset;
use crate::domain::value_objects::AssetPatterns;

/// Filters build assets by base-name glob patterns
#[derive(Debug, Clone, Default)]
pub struct AssetSelector {
    patterns: AssetPatterns,
}

impl AssetSelector {
    pub fn new(patterns: AssetPatterns) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &AssetPatterns {
        &self.patterns
    }

    /// Whether a single asset name is selected
    pub fn is_selected(&self, asset_name: &str) -> bool {
        self.patterns.matches(asset_name)
    }

    /// Ordered subsequence of `assets` that match at least one pattern
    pub fn select<'a, A: Asset>(&self, assets: &'a [A]) -> Vec<&'a A> {
        assets
            .iter()
            .filter(|asset| self.is_selected(asset.name()))
            .collect()
    }
}
