//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod aggregator;
mod emitter;
mod selector;

pub use aggregator::{digest_asset, DigestAggregator};
pub use emitter::{ManifestEmitter, DEFAULT_OUT_FILE};
pub use selector::AssetSelector;
