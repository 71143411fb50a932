//! Domain Layer
//!
//! The integrity core: selection, digesting and manifest shaping without I/O.
//!
//! ## Structure
//!
//! - `entities/` - BuildAsset, ManifestDocument, OutputFile
//! - `value_objects/` - HashingAlgorithm, ContentDigest, AssetPatterns, ManifestShape
//! - `services/` - AssetSelector, DigestAggregator, ManifestEmitter
//! - `ports/` - TextSource, implemented by asset collaborators
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **One pass, fresh state** - Services hold no state across passes
//! 3. **Ports & Adapters** - Asset payloads are read through `TextSource`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
