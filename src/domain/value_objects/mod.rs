//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_patterns;
mod config_warning;
mod digest;
mod glob_pattern;
mod hashing_algorithm;
mod manifest_shape;

pub use asset_patterns::{base_name, extension_key, AssetPatterns, DEFAULT_ASSET_PATTERN};
pub use config_warning::ConfigWarning;
pub use digest::ContentDigest;
pub use glob_pattern::{GlobError, GlobPattern};
pub use hashing_algorithm::HashingAlgorithm;
pub use manifest_shape::ManifestShape;
