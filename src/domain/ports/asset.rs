//! Asset port - a named build output whose content can be read as text
//!
//! The pipeline needs two things from each asset handed over by the build:
//! its path-like name and access to its content. Hosts implement this for
//! their own asset types; `BuildAsset` is the implementation used by the
//! file system loader.

use super::TextSource;

/// A finished build output, as seen by the selector and aggregator
pub trait Asset {
    /// Payload accessor for this kind of asset
    type Content: TextSource + ?Sized;

    /// Path-like name, `/`-separated
    fn name(&self) -> &str;

    fn content(&self) -> &Self::Content;
}

impl<T: Asset + ?Sized> Asset for &T {
    type Content = T::Content;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn content(&self) -> &Self::Content {
        (**self).content()
    }
}
