//! asset-sha - post-build asset integrity reporter
//!
//! After a bundler has produced its output, asset-sha selects assets by
//! base-name glob, digests each one (SHA-256/384/512, base64) and summarizes
//! the digests in a single JSON manifest, either keyed by asset name or
//! grouped by file extension.
//!
//! ```
//! use asset_sha::{run_pass, BuildAsset, Config};
//!
//! let assets = vec![
//!     BuildAsset::text("app.css", "body{}"),
//!     BuildAsset::text("main.js", "console.log(1)"),
//! ];
//! let manifest = run_pass(&assets, &Config::default()).unwrap();
//! assert_eq!(manifest.hashes().keys(), vec![".css"]);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{run_pass, ManifestPipeline};
pub use config::Config;
pub use domain::entities::{AssetContent, BuildAsset, ManifestDocument, ManifestHashes, OutputFile};
pub use domain::ports::{Asset, TextSource, UnsupportedContent};
pub use domain::services::{
    digest_asset, AssetSelector, DigestAggregator, ManifestEmitter, DEFAULT_OUT_FILE,
};
pub use domain::value_objects::{
    base_name, extension_key, AssetPatterns, ContentDigest, GlobError, GlobPattern, HashingAlgorithm,
    ManifestShape,
};
pub use error::{ManifestError, ManifestResult};
pub use infrastructure::{FsAssetRepository, LocalFs};
