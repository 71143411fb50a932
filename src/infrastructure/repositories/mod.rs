//! Repository Implementations

mod asset;

pub use asset::FsAssetRepository;
