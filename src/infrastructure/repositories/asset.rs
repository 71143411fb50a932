//! File System Asset Repository
//!
//! Loads the finished output of a build from disk as `BuildAsset`s.

use std::io;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::debug;

use crate::domain::entities::{AssetContent, BuildAsset};
use crate::error::ManifestResult;

/// Asset repository backed by a build output directory
///
/// Every regular file below the root becomes one asset, named by its
/// `/`-separated path relative to the root. Ignore files, hidden-file rules
/// and symlinks are not followed or honored: the build output is taken as is.
#[derive(Debug, Clone, Default)]
pub struct FsAssetRepository {
    /// Relative name skipped while loading (a previously emitted manifest)
    skip: Option<String>,
}

impl FsAssetRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the file with this relative name, e.g. the manifest from a previous run
    pub fn skipping(mut self, relative_name: impl Into<String>) -> Self {
        self.skip = Some(relative_name.into());
        self
    }

    /// Load all files below `root`, sorted by asset name
    pub fn load(&self, root: &Path) -> ManifestResult<Vec<BuildAsset>> {
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        let mut assets = Vec::new();
        for entry in walker {
            let entry = entry.map_err(io::Error::other)?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let name = asset_name(relative);
            if self.skip.as_deref() == Some(name.as_str()) {
                debug!(asset = %name, "skipping previous manifest");
                continue;
            }
            let bytes = std::fs::read(entry.path())?;
            assets.push(BuildAsset::new(name, AssetContent::from_bytes(bytes)));
        }

        assets.sort_by(|a, b| a.name().cmp(b.name()));
        debug!(root = %root.display(), count = assets.len(), "loaded build assets");
        Ok(assets)
    }

    /// Load a single file, named by its path as given
    pub fn load_file(&self, path: &Path) -> ManifestResult<BuildAsset> {
        let bytes = std::fs::read(path)?;
        Ok(BuildAsset::new(
            path.to_string_lossy().into_owned(),
            AssetContent::from_bytes(bytes),
        ))
    }
}

/// Join relative path components with `/` regardless of platform
fn asset_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
