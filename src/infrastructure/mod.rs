//! Infrastructure Layer
//!
//! The build-pipeline collaborators of the core: reading finished assets
//! from disk and persisting the emitted manifest.
//!
//! ## Structure
//!
//! - `fs/` - Atomic local writes
//! - `repositories/` - Build output directory loader

pub mod fs;
pub mod repositories;

pub use fs::LocalFs;
pub use repositories::FsAssetRepository;
