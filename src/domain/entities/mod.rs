//! Domain Entities
//!
//! - `BuildAsset` - a finished output handed over by the bundler
//! - `ManifestDocument` - the digest summary of one pass
//! - `OutputFile` - the serialized manifest under its target name

mod asset;
mod manifest;
mod output_file;

pub use asset::{AssetContent, BuildAsset};
pub use manifest::{ManifestDocument, ManifestHashes};
pub use output_file::OutputFile;
